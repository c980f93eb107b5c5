//! NavigationBarSpecifier: bar colors plus title and button label styles.

use super::text_label::TextLabelSpecifier;
use super::Fields;
use crate::config::Mapping;
use crate::style::Color;
use crate::theme::ThemeSetConfig;

/// Style of a navigation bar.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationBarSpecifier {
    /// Defaults to true; `disableTranslucency: true` turns it off.
    pub translucent: bool,
    pub popover_background_color: Option<Color>,
    pub bar_color: Option<Color>,
    pub tint_color: Option<Color>,
    /// From the `titleLabel` sub-mapping.
    pub title_label_specifier: TextLabelSpecifier,
    /// From the `buttonsLabel` sub-mapping.
    pub buttons_label_specifier: TextLabelSpecifier,
}

impl Default for NavigationBarSpecifier {
    fn default() -> Self {
        Self {
            translucent: true,
            popover_background_color: None,
            bar_color: None,
            tint_color: None,
            title_label_specifier: TextLabelSpecifier::default(),
            buttons_label_specifier: TextLabelSpecifier::default(),
        }
    }
}

impl NavigationBarSpecifier {
    /// Build from a theme sub-mapping. `size_adjustment` applies to both labels.
    pub fn from_mapping(map: &Mapping, size_adjustment: f32, config: &ThemeSetConfig) -> Self {
        Self::from_fields(&Fields::new(map, "", config), size_adjustment)
    }

    pub(crate) fn from_fields(fields: &Fields<'_>, size_adjustment: f32) -> Self {
        // A missing or scalar label still gets the configured, adjusted font.
        let label = |field: &'static str| match fields.nested(field) {
            Some(nested) => TextLabelSpecifier::from_fields(&nested, size_adjustment),
            None => TextLabelSpecifier::from_mapping(&Mapping::new(), size_adjustment, fields.config()),
        };

        Self {
            translucent: !fields.bool("disableTranslucency"),
            popover_background_color: fields.color("popoverBackgroundColor"),
            bar_color: fields.color("barColor"),
            tint_color: fields.color("tintColor"),
            title_label_specifier: label("titleLabel"),
            buttons_label_specifier: label("buttonsLabel"),
        }
    }
}
