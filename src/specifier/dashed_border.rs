//! DashedBorderSpecifier.

use super::Fields;
use crate::config::Mapping;
use crate::geometry::EdgeInsets;
use crate::style::Color;
use crate::theme::ThemeSetConfig;

/// A dashed outline: alternating painted and empty segments along a rounded rect.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashedBorderSpecifier {
    pub line_width: f32,
    pub color: Option<Color>,
    pub corner_radius: f32,
    pub painted_segment_length: f32,
    pub spacing_segment_length: f32,
    pub insets: EdgeInsets,
}

impl DashedBorderSpecifier {
    /// Build from a theme sub-mapping.
    pub fn from_mapping(map: &Mapping, config: &ThemeSetConfig) -> Self {
        Self::from_fields(&Fields::new(map, "", config))
    }

    pub(crate) fn from_fields(fields: &Fields<'_>) -> Self {
        Self {
            line_width: fields.f32("lineWidth"),
            color: fields.color("color"),
            corner_radius: fields.f32("cornerRadius"),
            painted_segment_length: fields.f32("paintedSegmentLength"),
            spacing_segment_length: fields.f32("spacingSegmentLength"),
            insets: fields.insets("insets"),
        }
    }

    /// Painted plus spacing length; 0 means a solid line.
    pub fn dash_period(&self) -> f32 {
        self.painted_segment_length + self.spacing_segment_length
    }
}
