//! ViewSpecifier: frame, background colors, padding.

use super::Fields;
use crate::config::Mapping;
use crate::geometry::{EdgeInsets, Point, Rect, Size};
use crate::style::Color;
use crate::theme::ThemeSetConfig;

/// Style of a plain view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewSpecifier {
    pub size: Size,
    pub position: Point,
    pub background_color: Option<Color>,
    pub highlighted_background_color: Option<Color>,
    pub padding: EdgeInsets,
}

impl ViewSpecifier {
    /// Build from a theme sub-mapping.
    pub fn from_mapping(map: &Mapping, config: &ThemeSetConfig) -> Self {
        Self::from_fields(&Fields::new(map, "", config))
    }

    pub(crate) fn from_fields(fields: &Fields<'_>) -> Self {
        Self {
            size: fields.size("size"),
            position: fields.point("position"),
            background_color: fields.color("backgroundColor"),
            highlighted_background_color: fields.color("highlightedBackgroundColor"),
            padding: fields.insets("padding"),
        }
    }

    /// Position and size as a rectangle.
    pub fn frame(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    /// The frame with `padding` taken off each side.
    pub fn content_frame(&self) -> Rect {
        self.frame().inset(self.padding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_all_fields() {
        let map = Mapping::new()
            .with("size", Mapping::new().with("width", 320).with("height", 44))
            .with("position", Mapping::new().with("x", 0).with("y", 20))
            .with("backgroundColor", Mapping::new().with("hex", "#336699"))
            .with("padding", Mapping::new().with("top", 4).with("bottom", 4));
        let view = ViewSpecifier::from_mapping(&map, &ThemeSetConfig::default());

        assert_eq!(view.frame(), Rect::new(Point::new(0.0, 20.0), Size::new(320.0, 44.0)));
        assert_eq!(view.background_color, Some(Color::rgb(0x33, 0x66, 0x99)));
        assert_eq!(view.highlighted_background_color, None);
        assert_eq!(view.padding, EdgeInsets::new(4.0, 0.0, 4.0, 0.0));
        assert_eq!(view.content_frame(), Rect::new(Point::new(0.0, 24.0), Size::new(320.0, 36.0)));
    }

    #[test]
    fn empty_mapping_is_default() {
        let view = ViewSpecifier::from_mapping(&Mapping::new(), &ThemeSetConfig::default());
        assert_eq!(view, ViewSpecifier::default());
    }

    #[test]
    fn malformed_color_uses_configured_fallback() {
        let map = Mapping::new().with("backgroundColor", Mapping::new().with("hex", "nope"));
        let config = ThemeSetConfig::new().with_fallback_color(Color::WHITE);
        let view = ViewSpecifier::from_mapping(&map, &config);
        assert_eq!(view.background_color, Some(Color::WHITE));
    }
}
