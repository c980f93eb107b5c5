//! Theme types: ThemeId, Theme, ThemeCaches.

use std::sync::Arc;

use slotmap::new_key_type;

use super::cache::Cache;
use crate::config::Mapping;
use crate::specifier::{NavigationBarSpecifier, TextLabelSpecifier, ViewSpecifier};
use crate::style::{Color, Font};

new_key_type! {
    /// Identifier of a theme within a [`ThemeSet`](super::ThemeSet). Copy, lightweight (u64).
    ///
    /// Ids are versioned: an id whose theme was removed never matches a later theme.
    pub struct ThemeId;
}

/// The five resolution caches owned by one theme.
#[derive(Debug)]
pub struct ThemeCaches {
    pub(crate) fonts: Cache<Font>,
    pub(crate) colors: Cache<Color>,
    pub(crate) view_specifiers: Cache<Arc<ViewSpecifier>>,
    pub(crate) text_label_specifiers: Cache<Arc<TextLabelSpecifier>>,
    pub(crate) navigation_bar_specifiers: Cache<Arc<NavigationBarSpecifier>>,
}

impl Default for ThemeCaches {
    fn default() -> Self {
        Self {
            fonts: Cache::new("font"),
            colors: Cache::new("color"),
            view_specifiers: Cache::new("view specifier"),
            text_label_specifiers: Cache::new("text label specifier"),
            navigation_bar_specifiers: Cache::new("navigation bar specifier"),
        }
    }
}

impl ThemeCaches {
    /// Entry counts, one per cache.
    pub fn counts(&self) -> CacheCounts {
        CacheCounts {
            fonts: self.fonts.len(),
            colors: self.colors.len(),
            view_specifiers: self.view_specifiers.len(),
            text_label_specifiers: self.text_label_specifiers.len(),
            navigation_bar_specifiers: self.navigation_bar_specifiers.len(),
        }
    }

    /// Empty all five caches.
    pub fn clear_all(&self) {
        self.fonts.clear();
        self.colors.clear();
        self.view_specifiers.clear();
        self.text_label_specifiers.clear();
        self.navigation_bar_specifiers.clear();
    }
}

/// Snapshot of how many entries each cache holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheCounts {
    pub fonts: usize,
    pub colors: usize,
    pub view_specifiers: usize,
    pub text_label_specifiers: usize,
    pub navigation_bar_specifiers: usize,
}

/// A named raw configuration and its caches.
///
/// The mapping is fixed at construction. The parent link lives in the
/// owning [`ThemeSet`](super::ThemeSet).
#[derive(Debug)]
pub struct Theme {
    name: String,
    mapping: Mapping,
    pub(crate) parent: Option<ThemeId>,
    pub(crate) caches: ThemeCaches,
}

impl Theme {
    pub(crate) fn new(name: impl Into<String>, mapping: Mapping) -> Self {
        Self { name: name.into(), mapping, parent: None, caches: ThemeCaches::default() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw configuration.
    pub fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    /// The parent id as stored. It may refer to a theme that has since been removed.
    pub fn parent_id(&self) -> Option<ThemeId> {
        self.parent
    }

    pub fn caches(&self) -> &ThemeCaches {
        &self.caches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Value;
    use crate::theme::cache::CacheKey;

    #[test]
    fn new_theme_has_empty_caches() {
        let theme = Theme::new("light", Mapping::new().with("k", 1));
        assert_eq!(theme.name(), "light");
        assert_eq!(theme.mapping().get("k"), Some(&Value::Number(1.0)));
        assert_eq!(theme.parent_id(), None);
        assert_eq!(theme.caches().counts(), CacheCounts::default());
    }

    #[test]
    fn clear_all_empties_every_cache() {
        let theme = Theme::new("light", Mapping::new());
        let caches = theme.caches();
        caches.fonts.get_or_insert_with(CacheKey::plain("f"), || Font::system(12.0));
        caches.colors.get_or_insert_with(CacheKey::plain("c"), || Color::WHITE);
        assert_eq!(caches.counts().fonts, 1);
        assert_eq!(caches.counts().colors, 1);
        caches.clear_all();
        assert_eq!(caches.counts(), CacheCounts::default());
    }
}
