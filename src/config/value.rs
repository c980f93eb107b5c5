//! Raw configuration values: Value, Mapping.
//!
//! A theme document is a tree of string-keyed mappings whose leaves are
//! booleans, numbers, or strings. Nothing here interprets the values; that is
//! the job of [`crate::coerce`].

use std::fmt;

use indexmap::IndexMap;

/// Separator for key paths such as `"navigationBar.titleLabel"`.
pub const KEY_PATH_SEPARATOR: char = '.';

/// A single raw configuration value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `true` / `false`.
    Bool(bool),
    /// Any number. Integers and floats share one representation.
    Number(f64),
    /// A string, e.g. a font name or an enum keyword.
    String(String),
    /// A nested mapping, e.g. a color `{hex, alpha}` or a specifier.
    Map(Mapping),
}

impl Value {
    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Map(_) => "mapping",
        }
    }

    /// The nested mapping, if this value is one.
    pub fn as_map(&self) -> Option<&Mapping> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// The string, if this value is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Map(map) => write!(f, "{{{} keys}}", map.len()),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Mapping> for Value {
    fn from(value: Mapping) -> Self {
        Value::Map(value)
    }
}

// ---------------------------------------------------------------------------
// Mapping
// ---------------------------------------------------------------------------

/// An ordered string-keyed mapping of raw values.
///
/// Insertion order is preserved so that diagnostics and iteration follow the
/// source document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mapping {
    entries: IndexMap<String, Value>,
}

impl Mapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry (builder).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert an entry, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Local single-segment lookup.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Whether the mapping holds `key` as a literal top-level entry.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Look up a key path.
    ///
    /// The literal key wins if present; otherwise the path is split on
    /// [`KEY_PATH_SEPARATOR`] and walked through nested mappings.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        if let Some(value) = self.entries.get(path) {
            return Some(value);
        }
        if !path.contains(KEY_PATH_SEPARATOR) {
            return None;
        }

        let mut segments = path.split(KEY_PATH_SEPARATOR);
        let first = segments.next()?;
        let mut current = self.entries.get(first)?;
        for segment in segments {
            current = current.as_map()?.get(segment)?;
        }
        Some(current)
    }

    /// Nested mapping stored under `key`, if the entry is a mapping.
    pub fn get_map(&self, key: &str) -> Option<&Mapping> {
        self.get(key).and_then(Value::as_map)
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the top-level keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over the top-level entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Mapping::new();
        for (key, value) in iter {
            mapping.insert(key, value);
        }
        mapping
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Mapping {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl IntoIterator for Mapping {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
