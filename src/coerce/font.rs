//! Font coercion from `{name, size}` mappings.

use std::fmt;

use super::{scalar, CoercionError};
use crate::config::Value;
use crate::style::{Font, FontCatalog, DEFAULT_FONT_SIZE};

/// Inputs to font coercion that come from the theme set, not the document.
#[derive(Debug, Clone, Copy)]
pub struct FontDefaults<'a> {
    /// Size used when the document gives none, or gives one below 1pt.
    pub size: f32,
    pub catalog: &'a dyn FontCatalog,
}

impl<'a> FontDefaults<'a> {
    pub fn new(size: f32, catalog: &'a dyn FontCatalog) -> Self {
        Self { size, catalog }
    }

    /// `size + adjustment`, or the default size when that is below 1pt.
    pub fn effective_size(&self, size: f32, adjustment: f32) -> f32 {
        let adjusted = size + adjustment;
        if adjusted >= 1.0 {
            adjusted
        } else if self.size >= 1.0 {
            self.size
        } else {
            DEFAULT_FONT_SIZE
        }
    }
}

/// Coerce a `{name, size}` mapping to a [`Font`], adding `adjustment` to the size.
///
/// A missing or empty name is the system font. A name the catalog does not
/// know fails with [`CoercionError::UnknownFont`], which carries the size
/// that was requested.
pub fn to_font(
    value: Option<&Value>,
    adjustment: f32,
    defaults: &FontDefaults<'_>,
) -> Result<Font, CoercionError> {
    let value = value.ok_or(CoercionError::MissingKey)?;
    let map = value.as_map().ok_or_else(|| CoercionError::malformed("font mapping", value))?;

    let base = match map.get("size") {
        None => defaults.size,
        Some(size) => scalar::to_f64(Some(size))? as f32,
    };
    let size = defaults.effective_size(base, adjustment);

    match map.get("name") {
        None => Ok(Font::system(size)),
        Some(Value::String(name)) if name.trim().is_empty() => Ok(Font::system(size)),
        Some(Value::String(name)) if defaults.catalog.contains(name) => Ok(Font::named(name, size)),
        Some(Value::String(name)) => Err(CoercionError::UnknownFont { name: name.clone(), size }),
        Some(other) => Err(CoercionError::malformed("font name", other)),
    }
}

/// Coerce to a font, falling back to the system font.
///
/// An unknown name keeps the requested size; anything else uses the default
/// size plus `adjustment`.
pub fn font_or_default(
    value: Option<&Value>,
    adjustment: f32,
    defaults: &FontDefaults<'_>,
    key: impl fmt::Display,
) -> Font {
    match to_font(value, adjustment, defaults) {
        Ok(font) => font,
        Err(CoercionError::UnknownFont { name, size }) => {
            log::debug!("theme key {key}: unknown font {name:?}, using the system font");
            Font::system(size)
        }
        Err(err) => {
            if !err.is_missing() {
                log::debug!("theme key {key}: {err}, using the system font");
            }
            Font::system(defaults.effective_size(defaults.size, adjustment))
        }
    }
}
