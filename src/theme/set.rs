//! ThemeSet: the theme registry. Insert, remove, re-link, walk the parent chain.

use slotmap::SlotMap;

use super::config::ThemeSetConfig;
use super::error::ThemeError;
use super::node::{Theme, ThemeId};
use super::resolve::ThemeRef;
use crate::config::Mapping;

/// A set of themes linked by parent references, backed by a slotmap arena.
///
/// Parents are stored as [`ThemeId`]s, never owned. Removing a theme leaves
/// its children in place; they then resolve as if they had no parent.
#[derive(Debug)]
pub struct ThemeSet {
    themes: SlotMap<ThemeId, Theme>,
    default: Option<ThemeId>,
    config: ThemeSetConfig,
}

impl ThemeSet {
    /// Create an empty set with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ThemeSetConfig::default())
    }

    /// Create an empty set with `config`.
    pub fn with_config(config: ThemeSetConfig) -> Self {
        Self { themes: SlotMap::with_key(), default: None, config }
    }

    pub fn config(&self) -> &ThemeSetConfig {
        &self.config
    }

    /// Insert a parentless theme.
    pub fn insert(&mut self, name: impl Into<String>, mapping: Mapping) -> ThemeId {
        self.themes.insert(Theme::new(name, mapping))
    }

    /// Insert a theme that inherits from `parent`.
    pub fn insert_with_parent(
        &mut self,
        name: impl Into<String>,
        mapping: Mapping,
        parent: ThemeId,
    ) -> Result<ThemeId, ThemeError> {
        if !self.contains(parent) {
            return Err(ThemeError::UnknownTheme(parent));
        }
        let mut theme = Theme::new(name, mapping);
        theme.parent = Some(parent);
        Ok(self.themes.insert(theme))
    }

    /// Re-link `child` to `parent`, or detach it with `None`.
    ///
    /// Fails if either theme is unknown or if the link would make `child`
    /// its own ancestor.
    pub fn set_parent(&mut self, child: ThemeId, parent: Option<ThemeId>) -> Result<(), ThemeError> {
        if !self.contains(child) {
            return Err(ThemeError::UnknownTheme(child));
        }
        if let Some(parent) = parent {
            if !self.contains(parent) {
                return Err(ThemeError::UnknownTheme(parent));
            }
            if self.chain(parent).any(|(id, _)| id == child) {
                return Err(ThemeError::InheritanceCycle {
                    child: self.name_of(child).to_owned(),
                    parent: self.name_of(parent).to_owned(),
                });
            }
        }
        if let Some(theme) = self.themes.get_mut(child) {
            theme.parent = parent;
        }
        Ok(())
    }

    /// Remove a theme. Its children keep their (now dangling) parent id.
    pub fn remove(&mut self, id: ThemeId) -> Option<Theme> {
        if self.default == Some(id) {
            self.default = None;
        }
        self.themes.remove(id)
    }

    /// The parent of `id`, if it is set and still in the set.
    pub fn parent(&self, id: ThemeId) -> Option<ThemeId> {
        self.themes.get(id)?.parent.filter(|parent| self.contains(*parent))
    }

    /// Walk from `id` up the parent chain, collecting ancestor ids.
    ///
    /// The returned vec does **not** include `id` itself; it starts with the
    /// immediate parent.
    pub fn ancestors(&self, id: ThemeId) -> Vec<ThemeId> {
        self.chain(id).skip(1).map(|(id, _)| id).collect()
    }

    /// A resolving handle to the theme with `id`.
    pub fn get(&self, id: ThemeId) -> Option<ThemeRef<'_>> {
        ThemeRef::new(self, id)
    }

    /// Raw access to a theme.
    pub fn theme(&self, id: ThemeId) -> Option<&Theme> {
        self.themes.get(id)
    }

    /// The first theme called `name`.
    pub fn named(&self, name: &str) -> Option<ThemeRef<'_>> {
        self.id_of(name).and_then(|id| self.get(id))
    }

    /// Id of the first theme called `name`.
    pub fn id_of(&self, name: &str) -> Option<ThemeId> {
        self.themes.iter().find(|(_, theme)| theme.name() == name).map(|(id, _)| id)
    }

    /// The theme every loaded theme inherits from, if one was loaded.
    pub fn default_theme(&self) -> Option<ThemeRef<'_>> {
        self.default.and_then(|id| self.get(id))
    }

    pub(crate) fn set_default(&mut self, id: ThemeId) {
        self.default = Some(id);
    }

    /// All theme names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.values().map(Theme::name)
    }

    /// All theme ids.
    pub fn ids(&self) -> impl Iterator<Item = ThemeId> + '_ {
        self.themes.keys()
    }

    /// Number of themes in the set.
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Whether the set contains a theme with the given id.
    pub fn contains(&self, id: ThemeId) -> bool {
        self.themes.contains_key(id)
    }

    /// Empty every cache of every theme.
    pub fn clear_all_caches(&self) {
        for theme in self.themes.values() {
            theme.caches.clear_all();
        }
    }

    /// `id` followed by its live ancestors, nearest first.
    ///
    /// Stops at a missing or removed parent, and after visiting as many themes
    /// as the set holds.
    pub(crate) fn chain(&self, id: ThemeId) -> Chain<'_> {
        Chain { themes: &self.themes, next: Some(id), remaining: self.themes.len() }
    }

    fn name_of(&self, id: ThemeId) -> &str {
        self.themes.get(id).map(Theme::name).unwrap_or_default()
    }
}

impl Default for ThemeSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a theme and its ancestors. See [`ThemeSet::chain`].
pub(crate) struct Chain<'a> {
    themes: &'a SlotMap<ThemeId, Theme>,
    next: Option<ThemeId>,
    remaining: usize,
}

impl<'a> Iterator for Chain<'a> {
    type Item = (ThemeId, &'a Theme);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.next.take()?;
        let theme = self.themes.get(id)?;
        self.remaining -= 1;
        self.next = theme.parent;
        Some((id, theme))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a small chain:
    /// ```text
    ///   base <- brand <- screen
    ///   other
    /// ```
    fn build_set() -> (ThemeSet, ThemeId, ThemeId, ThemeId, ThemeId) {
        let mut set = ThemeSet::new();
        let base = set.insert("base", Mapping::new());
        let brand = set.insert_with_parent("brand", Mapping::new(), base).unwrap();
        let screen = set.insert_with_parent("screen", Mapping::new(), brand).unwrap();
        let other = set.insert("other", Mapping::new());
        (set, base, brand, screen, other)
    }

    #[test]
    fn insert_and_lookup() {
        let (set, base, _, screen, _) = build_set();
        assert_eq!(set.len(), 4);
        assert!(!set.is_empty());
        assert_eq!(set.id_of("screen"), Some(screen));
        assert_eq!(set.named("base").map(|t| t.id()), Some(base));
        assert!(set.named("missing").is_none());
        let mut names: Vec<_> = set.names().collect();
        names.sort();
        assert_eq!(names, vec!["base", "brand", "other", "screen"]);
    }

    #[test]
    fn ancestors_nearest_first() {
        let (set, base, brand, screen, other) = build_set();
        assert_eq!(set.ancestors(screen), vec![brand, base]);
        assert_eq!(set.ancestors(base), Vec::<ThemeId>::new());
        assert_eq!(set.ancestors(other), Vec::<ThemeId>::new());
        assert_eq!(set.parent(screen), Some(brand));
    }

    #[test]
    fn insert_with_unknown_parent_fails() {
        let (mut set, base, ..) = build_set();
        set.remove(base);
        let err = set.insert_with_parent("orphan", Mapping::new(), base).unwrap_err();
        assert!(matches!(err, ThemeError::UnknownTheme(id) if id == base));
    }

    #[test]
    fn set_parent_relinks_and_detaches() {
        let (mut set, base, brand, screen, other) = build_set();
        set.set_parent(screen, Some(other)).unwrap();
        assert_eq!(set.ancestors(screen), vec![other]);
        set.set_parent(brand, None).unwrap();
        assert_eq!(set.parent(brand), None);
        assert_eq!(set.ancestors(base), Vec::<ThemeId>::new());
    }

    #[test]
    fn set_parent_rejects_cycles() {
        let (mut set, base, _, screen, _) = build_set();
        let err = set.set_parent(base, Some(screen)).unwrap_err();
        assert!(matches!(err, ThemeError::InheritanceCycle { .. }));
        assert_eq!(
            err.to_string(),
            "making \"screen\" the parent of \"base\" would create an inheritance cycle"
        );
        assert!(set.set_parent(base, Some(base)).is_err());
        assert_eq!(set.parent(base), None);
    }

    #[test]
    fn removing_parent_leaves_child_parentless() {
        let (mut set, _, brand, screen, _) = build_set();
        let removed = set.remove(brand).unwrap();
        assert_eq!(removed.name(), "brand");
        assert!(set.contains(screen));
        assert_eq!(set.theme(screen).unwrap().parent_id(), Some(brand));
        assert_eq!(set.parent(screen), None);
        assert_eq!(set.ancestors(screen), Vec::<ThemeId>::new());
    }

    #[test]
    fn stale_id_does_not_match_new_theme() {
        let (mut set, _, brand, screen, _) = build_set();
        set.remove(brand);
        let replacement = set.insert("brand", Mapping::new());
        assert_ne!(replacement, brand);
        assert_eq!(set.parent(screen), None);
    }

    #[test]
    fn chain_is_bounded() {
        let (mut set, base, brand, ..) = build_set();
        // Force a cycle past the public API's guard.
        set.themes[base].parent = Some(brand);
        assert_eq!(set.chain(brand).count(), set.len());
    }
}
