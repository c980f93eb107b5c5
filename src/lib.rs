//! # livery
//!
//! Theme configuration resolved into typed, cacheable style values.
//!
//! A [`ThemeSet`] holds named themes, each a nested key-value [`Mapping`]
//! with an optional parent. Lookups walk the parent chain, coerce the raw
//! value into a typed result and fall back to a defined default when the key
//! is absent or malformed. Fonts, colors and the view, text label and
//! navigation bar specifiers are cached per theme.
//!
//! ## Core Systems
//!
//! - **[`config`]**: The raw [`Value`] / [`Mapping`] model and JSON import
//! - **[`style`]**: Colors, fonts and the keyword enums
//! - **[`coerce`]**: Converting raw values into typed values
//! - **[`theme`]**: Theme arena, inheritance, per-kind caches, typed lookups
//! - **[`specifier`]**: Composite style records and text attributes
//! - **[`adapter`]**: Widget traits, specifier transfer and animation running
//! - **[`testing`]**: Recording fakes and snapshot helpers
//! - **[`geometry`]**: Point, Size, Rect, EdgeInsets primitives
//!
//! ```
//! use livery::{Color, ThemeSet};
//!
//! let set = ThemeSet::from_json_str(r#"{
//!     "default": { "accent": { "hex": "3366FF" } },
//!     "dark": { "background": { "hex": "101010" } }
//! }"#).unwrap();
//!
//! let dark = set.named("dark").unwrap();
//! assert_eq!(dark.color_for_key("accent"), Color::rgb(0x33, 0x66, 0xff));
//! assert_eq!(dark.color_for_key("missing"), Color::BLACK);
//! ```

// Foundation
pub mod config;
pub mod geometry;
pub mod style;

// Resolution
pub mod coerce;
pub mod specifier;
pub mod theme;

// Rendering seam
pub mod adapter;
pub mod testing;

pub use adapter::{AnimationRunner, ImageLoader, Label, NavigationBar, TokioAnimationRunner, View};
pub use coerce::CoercionError;
pub use config::{Mapping, Value};
pub use geometry::{EdgeInsets, Point, Rect, Size};
pub use specifier::{
    AnimationSpecifier, AttributeKey, DashedBorderSpecifier, NavigationBarSpecifier, TextAttributes,
    TextLabelSpecifier, ViewSpecifier,
};
pub use style::{
    AnimationCurve, Color, Font, FontCatalog, KeyboardAppearance, LineBreakMode, StatusBarStyle,
    TextAlignment, TextCaseTransform,
};
pub use theme::{ThemeError, ThemeId, ThemeRef, ThemeSet, ThemeSetConfig};
