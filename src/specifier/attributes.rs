//! Renderer-agnostic text attributes derived from a text label specifier.

use std::collections::BTreeMap;
use std::fmt;

use crate::style::{Color, Font, LineBreakMode, TextAlignment};

/// Semantic attribute slots understood by text renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttributeKey {
    Font,
    ParagraphStyle,
    ForegroundColor,
    BackgroundColor,
}

impl AttributeKey {
    /// Every key, in display order.
    pub const ALL: [AttributeKey; 4] = [
        AttributeKey::Font,
        AttributeKey::ParagraphStyle,
        AttributeKey::ForegroundColor,
        AttributeKey::BackgroundColor,
    ];

    fn label(self) -> &'static str {
        match self {
            AttributeKey::Font => "font",
            AttributeKey::ParagraphStyle => "paragraph",
            AttributeKey::ForegroundColor => "foreground",
            AttributeKey::BackgroundColor => "background",
        }
    }
}

/// Paragraph-level layout: alignment, line breaking, spacing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParagraphStyle {
    pub alignment: TextAlignment,
    pub line_break_mode: LineBreakMode,
    /// Space after each paragraph, in points.
    pub paragraph_spacing: f32,
    /// Space before each paragraph, in points.
    pub paragraph_spacing_before: f32,
}

/// A value stored under an [`AttributeKey`].
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Font(Font),
    Color(Color),
    ParagraphStyle(ParagraphStyle),
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Font(font) => write!(f, "{font}"),
            AttributeValue::Color(color) => write!(f, "{color}"),
            AttributeValue::ParagraphStyle(style) => write!(
                f,
                "{:?}/{:?} spacing {} before {}",
                style.alignment,
                style.line_break_mode,
                style.paragraph_spacing,
                style.paragraph_spacing_before
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// TextAttributes
// ---------------------------------------------------------------------------

/// A set of text attributes, at most one value per key.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextAttributes {
    entries: BTreeMap<AttributeKey, AttributeValue>,
}

impl TextAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attribute, replacing any previous value for the key.
    pub fn insert(&mut self, key: AttributeKey, value: AttributeValue) {
        self.entries.insert(key, value);
    }

    /// Insert an attribute (builder).
    pub fn with(mut self, key: AttributeKey, value: AttributeValue) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: AttributeKey) -> Option<&AttributeValue> {
        self.entries.get(&key)
    }

    pub fn contains(&self, key: AttributeKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn font(&self) -> Option<&Font> {
        match self.get(AttributeKey::Font) {
            Some(AttributeValue::Font(font)) => Some(font),
            _ => None,
        }
    }

    pub fn foreground_color(&self) -> Option<Color> {
        match self.get(AttributeKey::ForegroundColor) {
            Some(AttributeValue::Color(color)) => Some(*color),
            _ => None,
        }
    }

    pub fn background_color(&self) -> Option<Color> {
        match self.get(AttributeKey::BackgroundColor) {
            Some(AttributeValue::Color(color)) => Some(*color),
            _ => None,
        }
    }

    pub fn paragraph_style(&self) -> Option<&ParagraphStyle> {
        match self.get(AttributeKey::ParagraphStyle) {
            Some(AttributeValue::ParagraphStyle(style)) => Some(style),
            _ => None,
        }
    }

    /// The subset holding only `keys`. Keys with no value are omitted.
    pub fn filtered(&self, keys: &[AttributeKey]) -> TextAttributes {
        let entries = self
            .entries
            .iter()
            .filter(|(key, _)| keys.contains(key))
            .map(|(key, value)| (*key, value.clone()))
            .collect();
        TextAttributes { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in key order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeKey, &AttributeValue)> {
        self.entries.iter().map(|(key, value)| (*key, value))
    }
}

/// One `key: value` per line, in key order.
impl fmt::Display for TextAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {value}", key.label())?;
        }
        Ok(())
    }
}

/// Text paired with the attributes to draw it with.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledText {
    pub text: String,
    pub attributes: TextAttributes,
}

impl StyledText {
    pub fn new(text: impl Into<String>, attributes: TextAttributes) -> Self {
        Self { text: text.into(), attributes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TextAttributes {
        TextAttributes::new()
            .with(AttributeKey::Font, AttributeValue::Font(Font::named("Avenir", 12.0)))
            .with(AttributeKey::ForegroundColor, AttributeValue::Color(Color::WHITE))
            .with(AttributeKey::ParagraphStyle, AttributeValue::ParagraphStyle(ParagraphStyle::default()))
    }

    #[test]
    fn typed_getters() {
        let attrs = sample();
        assert_eq!(attrs.font(), Some(&Font::named("Avenir", 12.0)));
        assert_eq!(attrs.foreground_color(), Some(Color::WHITE));
        assert_eq!(attrs.background_color(), None);
        assert_eq!(attrs.paragraph_style(), Some(&ParagraphStyle::default()));
    }

    #[test]
    fn filtered_omits_unrequested_and_absent() {
        let attrs = sample();
        let subset = attrs.filtered(&[AttributeKey::Font, AttributeKey::BackgroundColor]);
        assert_eq!(subset.len(), 1);
        assert!(subset.contains(AttributeKey::Font));
        assert!(!subset.contains(AttributeKey::BackgroundColor));
        assert!(attrs.filtered(&[]).is_empty());
    }

    #[test]
    fn display_lists_in_key_order() {
        insta::assert_snapshot!(sample().to_string(), @r"
        font: Avenir 12pt
        paragraph: Natural/WordWrap spacing 0 before 0
        foreground: #ffffff
        ");
    }
}
