//! Specifiers: immutable style descriptors composed from a theme sub-mapping.
//!
//! A specifier is always fully populated. Missing fields take their type
//! default, malformed fields are logged and take their fallback.

pub mod animation;
pub mod attributes;
pub mod dashed_border;
pub mod navigation_bar;
pub mod text_label;
pub mod view;

pub use animation::AnimationSpecifier;
pub use attributes::{AttributeKey, AttributeValue, ParagraphStyle, StyledText, TextAttributes};
pub use dashed_border::DashedBorderSpecifier;
pub use navigation_bar::NavigationBarSpecifier;
pub use text_label::TextLabelSpecifier;
pub use view::ViewSpecifier;

use std::time::Duration;

use crate::coerce::{self, FieldPath};
use crate::config::{Mapping, Value};
use crate::geometry::{EdgeInsets, Point, Size};
use crate::style::{Color, Font, Keyword};
use crate::theme::ThemeSetConfig;

// ---------------------------------------------------------------------------
// Fields
// ---------------------------------------------------------------------------

/// Typed reads of the fields of one specifier sub-mapping.
///
/// `key` is the theme key the mapping was found under; it only feeds
/// diagnostics.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fields<'a> {
    map: &'a Mapping,
    key: &'a str,
    config: &'a ThemeSetConfig,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(map: &'a Mapping, key: &'a str, config: &'a ThemeSetConfig) -> Self {
        Self { map, key, config }
    }

    pub(crate) fn config(&self) -> &'a ThemeSetConfig {
        self.config
    }

    fn path(&self, field: &'a str) -> FieldPath<'a> {
        FieldPath { key: self.key, field }
    }

    fn value(&self, field: &str) -> Option<&'a Value> {
        self.map.get(field)
    }

    pub(crate) fn contains(&self, field: &str) -> bool {
        self.map.contains_key(field)
    }

    pub(crate) fn f32(&self, field: &'a str) -> f32 {
        coerce::f32_or_default(self.value(field), self.path(field))
    }

    pub(crate) fn bool(&self, field: &'a str) -> bool {
        coerce::bool_or_default(self.value(field), self.path(field))
    }

    pub(crate) fn integer(&self, field: &'a str) -> i64 {
        coerce::integer_or_default(self.value(field), self.path(field))
    }

    pub(crate) fn duration(&self, field: &'a str) -> Duration {
        coerce::duration_or_default(self.value(field), self.path(field))
    }

    pub(crate) fn keyword<K: Keyword>(&self, field: &'a str) -> K {
        coerce::keyword_or_default(self.value(field), self.path(field))
    }

    pub(crate) fn point(&self, field: &'a str) -> Point {
        coerce::point_or_default(self.value(field), self.path(field))
    }

    pub(crate) fn size(&self, field: &'a str) -> Size {
        coerce::size_or_default(self.value(field), self.path(field))
    }

    pub(crate) fn insets(&self, field: &'a str) -> EdgeInsets {
        coerce::edge_insets_or_default(self.value(field), self.path(field))
    }

    /// `None` when the field is absent, the fallback color when malformed.
    pub(crate) fn color(&self, field: &'a str) -> Option<Color> {
        let value = self.value(field)?;
        Some(coerce::color_or(Some(value), self.path(field), self.config.fallback_color))
    }

    pub(crate) fn font(&self, field: &'a str, adjustment: f32) -> Font {
        let defaults = self.config.font_defaults();
        coerce::font_or_default(self.value(field), adjustment, &defaults, self.path(field))
    }

    /// A nested sub-mapping, read with the same configuration.
    pub(crate) fn nested(&self, field: &'a str) -> Option<Fields<'a>> {
        match self.value(field) {
            None => None,
            Some(Value::Map(map)) => Some(Fields { map, key: field, config: self.config }),
            Some(other) => {
                log::debug!("theme key {}: expected a mapping, found {}", self.path(field), other.kind());
                None
            }
        }
    }
}
