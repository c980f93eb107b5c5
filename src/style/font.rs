//! Font descriptors and the catalog used to validate font names.

use std::collections::HashSet;
use std::fmt;

/// Point size used when a font mapping has no usable size.
pub const DEFAULT_FONT_SIZE: f32 = 15.0;

/// Which face a [`Font`] refers to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// The platform's default UI font.
    System,
    /// A fully specified font name, e.g. `"Helvetica-Bold"`.
    Named(String),
}

/// A resolved font: a family at a point size.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: FontFamily,
    pub size: f32,
}

impl Font {
    /// The platform default font at `size`.
    pub fn system(size: f32) -> Self {
        Self { family: FontFamily::System, size }
    }

    /// A named font at `size`.
    pub fn named(name: impl Into<String>, size: f32) -> Self {
        Self { family: FontFamily::Named(name.into()), size }
    }

    /// The font name, or `None` for the system font.
    pub fn name(&self) -> Option<&str> {
        match &self.family {
            FontFamily::System => None,
            FontFamily::Named(name) => Some(name.as_str()),
        }
    }

    /// Whether this is the platform default font.
    pub fn is_system(&self) -> bool {
        self.family == FontFamily::System
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.family {
            FontFamily::System => write!(f, "system {}pt", self.size),
            FontFamily::Named(name) => write!(f, "{name} {}pt", self.size),
        }
    }
}

// ---------------------------------------------------------------------------
// Catalogs
// ---------------------------------------------------------------------------

/// Decides which font names the platform can resolve.
///
/// Names the catalog rejects fall back to the system font at the requested size.
pub trait FontCatalog: fmt::Debug + Send + Sync {
    /// Whether a font with this exact name is available.
    fn contains(&self, name: &str) -> bool;
}

/// Catalog that accepts every name. The default.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyFont;

impl FontCatalog for AnyFont {
    fn contains(&self, _name: &str) -> bool {
        true
    }
}

/// Catalog restricted to a fixed list of names.
#[derive(Debug, Clone, Default)]
pub struct FontList {
    names: HashSet<String>,
}

impl FontList {
    /// Create a catalog containing exactly `names`.
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self { names: names.into_iter().map(Into::into).collect() }
    }

    /// Add a name (builder).
    pub fn with(mut self, name: impl Into<String>) -> Self {
        self.names.insert(name.into());
        self
    }
}

impl FontCatalog for FontList {
    fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors() {
        let f = Font::named("Helvetica", 12.0);
        assert_eq!(f.name(), Some("Helvetica"));
        assert!(!f.is_system());

        let s = Font::system(15.0);
        assert_eq!(s.name(), None);
        assert!(s.is_system());
    }

    #[test]
    fn display() {
        assert_eq!(Font::named("Avenir", 12.0).to_string(), "Avenir 12pt");
        assert_eq!(Font::system(15.5).to_string(), "system 15.5pt");
    }

    #[test]
    fn any_font_accepts_everything() {
        assert!(AnyFont.contains("Whatever-Regular"));
        assert!(AnyFont.contains(""));
    }

    #[test]
    fn font_list_is_exact() {
        let catalog = FontList::new(["Helvetica"]).with("Avenir-Book");
        assert!(catalog.contains("Helvetica"));
        assert!(catalog.contains("Avenir-Book"));
        assert!(!catalog.contains("helvetica"));
        assert!(!catalog.contains("Comic Sans"));
    }
}
