//! ThemeSetConfig: settings shared by every theme in a set.

use std::sync::Arc;

use crate::coerce::FontDefaults;
use crate::style::{AnyFont, Color, FontCatalog, DEFAULT_FONT_SIZE};

/// Configuration for a [`ThemeSet`](super::ThemeSet).
#[derive(Debug, Clone)]
pub struct ThemeSetConfig {
    /// Name of the theme that becomes every other loaded theme's parent.
    /// Matched case-insensitively.
    pub default_theme_name: String,
    /// Color returned for malformed or absent color data.
    pub fallback_color: Color,
    /// Font size used when a font mapping gives none.
    pub default_font_size: f32,
    /// Font names the platform can resolve.
    pub font_catalog: Arc<dyn FontCatalog>,
}

impl Default for ThemeSetConfig {
    fn default() -> Self {
        Self {
            default_theme_name: "default".to_owned(),
            fallback_color: Color::BLACK,
            default_font_size: DEFAULT_FONT_SIZE,
            font_catalog: Arc::new(AnyFont),
        }
    }
}

impl ThemeSetConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default theme name (builder).
    pub fn with_default_theme_name(mut self, name: impl Into<String>) -> Self {
        self.default_theme_name = name.into();
        self
    }

    /// Set the fallback color (builder).
    pub fn with_fallback_color(mut self, color: Color) -> Self {
        self.fallback_color = color;
        self
    }

    /// Set the default font size (builder).
    pub fn with_default_font_size(mut self, size: f32) -> Self {
        self.default_font_size = size;
        self
    }

    /// Set the font catalog (builder).
    pub fn with_font_catalog(mut self, catalog: impl FontCatalog + 'static) -> Self {
        self.font_catalog = Arc::new(catalog);
        self
    }

    pub(crate) fn font_defaults(&self) -> FontDefaults<'_> {
        FontDefaults::new(self.default_font_size, &*self.font_catalog)
    }

    pub(crate) fn is_default_theme_name(&self, name: &str) -> bool {
        name.eq_ignore_ascii_case(&self.default_theme_name)
    }
}
