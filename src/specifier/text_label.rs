//! TextLabelSpecifier: everything needed to style a run of label text.

use std::sync::OnceLock;

use super::attributes::{AttributeKey, AttributeValue, ParagraphStyle, StyledText, TextAttributes};
use super::Fields;
use crate::config::Mapping;
use crate::geometry::{EdgeInsets, Point, Rect, Size};
use crate::style::{Color, Font, LineBreakMode, TextAlignment, TextCaseTransform, DEFAULT_FONT_SIZE};
use crate::theme::ThemeSetConfig;

/// Style of a text label.
///
/// Immutable once built. The full attribute set is derived on first use and
/// kept for the life of the specifier.
#[derive(Debug, Clone)]
pub struct TextLabelSpecifier {
    font: Font,
    size: Size,
    size_to_fit: bool,
    position: Point,
    number_of_lines: usize,
    paragraph_spacing: f32,
    paragraph_spacing_multiple: f32,
    paragraph_spacing_before: f32,
    paragraph_spacing_before_multiple: f32,
    alignment: TextAlignment,
    line_break_mode: LineBreakMode,
    text_transform: TextCaseTransform,
    color: Option<Color>,
    highlighted_color: Option<Color>,
    background_color: Option<Color>,
    highlighted_background_color: Option<Color>,
    padding: EdgeInsets,
    attributes: OnceLock<TextAttributes>,
}

impl Default for TextLabelSpecifier {
    fn default() -> Self {
        Self {
            font: Font::system(DEFAULT_FONT_SIZE),
            size: Size::ZERO,
            size_to_fit: false,
            position: Point::ZERO,
            number_of_lines: 1,
            paragraph_spacing: 0.0,
            paragraph_spacing_multiple: 0.0,
            paragraph_spacing_before: 0.0,
            paragraph_spacing_before_multiple: 0.0,
            alignment: TextAlignment::default(),
            line_break_mode: LineBreakMode::default(),
            text_transform: TextCaseTransform::default(),
            color: None,
            highlighted_color: None,
            background_color: None,
            highlighted_background_color: None,
            padding: EdgeInsets::ZERO,
            attributes: OnceLock::new(),
        }
    }
}

/// Equality over the style fields; whether attributes were derived yet is irrelevant.
impl PartialEq for TextLabelSpecifier {
    fn eq(&self, other: &Self) -> bool {
        self.font == other.font
            && self.size == other.size
            && self.size_to_fit == other.size_to_fit
            && self.position == other.position
            && self.number_of_lines == other.number_of_lines
            && self.paragraph_spacing == other.paragraph_spacing
            && self.paragraph_spacing_multiple == other.paragraph_spacing_multiple
            && self.paragraph_spacing_before == other.paragraph_spacing_before
            && self.paragraph_spacing_before_multiple == other.paragraph_spacing_before_multiple
            && self.alignment == other.alignment
            && self.line_break_mode == other.line_break_mode
            && self.text_transform == other.text_transform
            && self.color == other.color
            && self.highlighted_color == other.highlighted_color
            && self.background_color == other.background_color
            && self.highlighted_background_color == other.highlighted_background_color
            && self.padding == other.padding
    }
}

impl TextLabelSpecifier {
    /// Build from a theme sub-mapping, adding `size_adjustment` to the font size.
    pub fn from_mapping(map: &Mapping, size_adjustment: f32, config: &ThemeSetConfig) -> Self {
        Self::from_fields(&Fields::new(map, "", config), size_adjustment)
    }

    pub(crate) fn from_fields(fields: &Fields<'_>, size_adjustment: f32) -> Self {
        // A present but unusable line count is 0 (unlimited); only absence means 1.
        let number_of_lines = if fields.contains("numberOfLines") {
            usize::try_from(fields.integer("numberOfLines")).unwrap_or(0)
        } else {
            1
        };

        Self {
            font: fields.font("font", size_adjustment),
            size: fields.size("size"),
            size_to_fit: fields.bool("sizeToFit"),
            position: fields.point("position"),
            number_of_lines,
            paragraph_spacing: fields.f32("paragraphSpacing"),
            paragraph_spacing_multiple: fields.f32("paragraphSpacingMultiple"),
            paragraph_spacing_before: fields.f32("paragraphSpacingBefore"),
            paragraph_spacing_before_multiple: fields.f32("paragraphSpacingBeforeMultiple"),
            alignment: fields.keyword("alignment"),
            line_break_mode: fields.keyword("lineBreakMode"),
            text_transform: fields.keyword("textTransform"),
            color: fields.color("color"),
            highlighted_color: fields.color("highlightedColor"),
            background_color: fields.color("backgroundColor"),
            highlighted_background_color: fields.color("highlightedBackgroundColor"),
            padding: fields.insets("padding"),
            attributes: OnceLock::new(),
        }
    }

    // -- accessors ----------------------------------------------------------

    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Label size. Advisory only when [`size_to_fit`](Self::size_to_fit) is set.
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn size_to_fit(&self) -> bool {
        self.size_to_fit
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Position and size as a rectangle.
    pub fn frame(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    /// Maximum line count; 0 means unlimited.
    pub fn number_of_lines(&self) -> usize {
        self.number_of_lines
    }

    pub fn paragraph_spacing(&self) -> f32 {
        self.paragraph_spacing
    }

    /// When positive, overrides `paragraph_spacing` as a multiple of the font size.
    pub fn paragraph_spacing_multiple(&self) -> f32 {
        self.paragraph_spacing_multiple
    }

    pub fn paragraph_spacing_before(&self) -> f32 {
        self.paragraph_spacing_before
    }

    /// When positive, overrides `paragraph_spacing_before` as a multiple of the font size.
    pub fn paragraph_spacing_before_multiple(&self) -> f32 {
        self.paragraph_spacing_before_multiple
    }

    pub fn alignment(&self) -> TextAlignment {
        self.alignment
    }

    pub fn line_break_mode(&self) -> LineBreakMode {
        self.line_break_mode
    }

    pub fn text_transform(&self) -> TextCaseTransform {
        self.text_transform
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn highlighted_color(&self) -> Option<Color> {
        self.highlighted_color
    }

    pub fn background_color(&self) -> Option<Color> {
        self.background_color
    }

    pub fn highlighted_background_color(&self) -> Option<Color> {
        self.highlighted_background_color
    }

    pub fn padding(&self) -> EdgeInsets {
        self.padding
    }

    /// The frame with `padding` taken off each side; where the text is laid out.
    pub fn content_frame(&self) -> Rect {
        self.frame().inset(self.padding)
    }

    // -- text ---------------------------------------------------------------

    /// Apply the case transform to `text`.
    pub fn transform_text(&self, text: &str) -> String {
        self.text_transform.apply(text)
    }

    /// Transformed `text` together with the full attribute set.
    pub fn attributed_string(&self, text: &str) -> StyledText {
        StyledText::new(self.transform_text(text), self.attributes().clone())
    }

    /// Paragraph style with spacing resolved against the font size.
    pub fn paragraph_style(&self) -> ParagraphStyle {
        let resolve = |absolute: f32, multiple: f32| {
            if multiple > 0.0 {
                self.font.size * multiple
            } else {
                absolute.max(0.0)
            }
        };
        ParagraphStyle {
            alignment: self.alignment,
            line_break_mode: self.line_break_mode,
            paragraph_spacing: resolve(self.paragraph_spacing, self.paragraph_spacing_multiple),
            paragraph_spacing_before: resolve(
                self.paragraph_spacing_before,
                self.paragraph_spacing_before_multiple,
            ),
        }
    }

    /// Font, paragraph style, and whichever colors are set.
    pub fn attributes(&self) -> &TextAttributes {
        self.attributes.get_or_init(|| {
            let mut attrs = TextAttributes::new();
            attrs.insert(AttributeKey::Font, AttributeValue::Font(self.font.clone()));
            attrs.insert(
                AttributeKey::ParagraphStyle,
                AttributeValue::ParagraphStyle(self.paragraph_style()),
            );
            if let Some(color) = self.color {
                attrs.insert(AttributeKey::ForegroundColor, AttributeValue::Color(color));
            }
            if let Some(color) = self.background_color {
                attrs.insert(AttributeKey::BackgroundColor, AttributeValue::Color(color));
            }
            attrs
        })
    }

    /// The attributes for `keys` only.
    pub fn attributes_for_keys(&self, keys: &[AttributeKey]) -> TextAttributes {
        self.attributes().filtered(keys)
    }

    /// Font, foreground and background attributes.
    pub fn font_and_color_attributes(&self) -> TextAttributes {
        self.attributes_for_keys(&[
            AttributeKey::Font,
            AttributeKey::ForegroundColor,
            AttributeKey::BackgroundColor,
        ])
    }
}
