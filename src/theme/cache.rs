//! Per-kind resolution caches.
//!
//! Each cache is its own lock-protected map, so clearing one never touches
//! another. A reader racing a clear sees the map either before or after it.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Cache key: theme key plus size adjustment rounded to hundredths of a point.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    key: String,
    /// Bits of the rounded hundredths, widened to `f64` so no adjustment saturates.
    adjustment: u64,
}

impl CacheKey {
    /// Key for an unparameterized lookup.
    pub fn plain(key: &str) -> Self {
        Self::adjusted(key, 0.0)
    }

    /// Key for a lookup with a size adjustment.
    pub fn adjusted(key: &str, adjustment: f32) -> Self {
        let hundredths =
            if adjustment.is_finite() { (f64::from(adjustment) * 100.0).round() } else { 0.0 };
        // `+ 0.0` folds -0.0 into 0.0.
        Self { key: key.to_owned(), adjustment: (hundredths + 0.0).to_bits() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

/// A lazily populated map from [`CacheKey`] to resolved values.
#[derive(Debug)]
pub struct Cache<V> {
    name: &'static str,
    entries: RwLock<HashMap<CacheKey, V>>,
}

impl<V: Clone> Cache<V> {
    /// Create an empty cache. `name` appears in log messages.
    pub fn new(name: &'static str) -> Self {
        Self { name, entries: RwLock::new(HashMap::new()) }
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<CacheKey, V>> {
        self.entries.read().unwrap_or_else(|poisoned| {
            log::warn!("{} cache lock was poisoned, recovering", self.name);
            poisoned.into_inner()
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<CacheKey, V>> {
        self.entries.write().unwrap_or_else(|poisoned| {
            log::warn!("{} cache lock was poisoned, recovering", self.name);
            poisoned.into_inner()
        })
    }

    /// The cached value for `key`, if any.
    pub fn get(&self, key: &CacheKey) -> Option<V> {
        self.read().get(key).cloned()
    }

    /// Return the cached value, or compute, store and return it.
    ///
    /// `compute` runs without the lock held. If another caller stored a value
    /// in the meantime, that value wins and is returned.
    pub fn get_or_insert_with(&self, key: CacheKey, compute: impl FnOnce() -> V) -> V {
        if let Some(value) = self.get(&key) {
            return value;
        }
        let value = compute();
        self.write().entry(key).or_insert(value).clone()
    }

    /// Drop every entry.
    pub fn clear(&self) {
        let mut entries = self.write();
        log::trace!("clearing {} cache ({} entries)", self.name, entries.len());
        entries.clear();
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.read().contains_key(key)
    }
}
