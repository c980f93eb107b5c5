//! Value coercion: raw [`Value`](crate::config::Value)s into domain types.
//!
//! Every coercion is a pure function `Option<&Value> -> Result<T, CoercionError>`
//! where `None` means the key was absent. The `*_or_default` wrappers turn a
//! failure into the documented fallback and log it at `debug` level; an
//! absent key is not logged.

pub mod color;
pub mod font;
pub mod geometry;
pub mod scalar;

use std::fmt;

pub use color::{color_or, to_color};
pub use font::{font_or_default, to_font, FontDefaults};
pub use geometry::{
    edge_insets_or_default, point_or_default, size_or_default, to_edge_insets, to_point, to_size,
};
pub use scalar::{
    bool_or_default, duration_or_default, f32_or_default, f64_or_default, integer_or_default,
    keyword_or_default, string_or_default, to_bool, to_duration, to_f64, to_integer, to_keyword,
    to_string,
};

/// Why a raw value could not be coerced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoercionError {
    /// The key is absent. Resolved to the type default, never reported.
    #[error("key is not present")]
    MissingKey,
    /// The value is present but has the wrong shape or type.
    #[error("expected {expected}, found {found}")]
    MalformedValue { expected: &'static str, found: String },
    /// A color mapping is missing its hex string or the hex is not six digits.
    #[error("malformed color: {reason}")]
    MalformedColor { reason: String },
    /// The font name is not known to the font catalog.
    #[error("unknown font {name:?}")]
    UnknownFont { name: String, size: f32 },
}

impl CoercionError {
    pub(crate) fn malformed(expected: &'static str, value: &crate::config::Value) -> Self {
        CoercionError::MalformedValue { expected, found: format!("{} {value}", value.kind()) }
    }

    /// Whether this is [`CoercionError::MissingKey`].
    pub fn is_missing(&self) -> bool {
        matches!(self, CoercionError::MissingKey)
    }
}

/// Unwrap `result`, or log the failure against `key` and use `fallback`.
pub fn resolve<T>(
    key: impl fmt::Display,
    result: Result<T, CoercionError>,
    fallback: impl FnOnce() -> T,
) -> T {
    match result {
        Ok(value) => value,
        Err(CoercionError::MissingKey) => fallback(),
        Err(err) => {
            log::debug!("theme key {key}: {err}, using fallback");
            fallback()
        }
    }
}

/// Display helper for `key.field` diagnostics without allocating.
#[derive(Debug, Clone, Copy)]
pub struct FieldPath<'a> {
    pub key: &'a str,
    pub field: &'a str,
}

impl fmt::Display for FieldPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.key.is_empty() {
            f.write_str(self.field)
        } else {
            write!(f, "{}.{}", self.key, self.field)
        }
    }
}
