//! Resolved style values: colors, fonts, keyword enums.

pub mod color;
pub mod font;
pub mod kinds;

pub use color::Color;
pub use font::{AnyFont, Font, FontCatalog, FontFamily, FontList, DEFAULT_FONT_SIZE};
pub use kinds::{
    AnimationCurve, KeyboardAppearance, Keyword, LineBreakMode, StatusBarStyle, TextAlignment,
    TextCaseTransform,
};
