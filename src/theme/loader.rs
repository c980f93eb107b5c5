//! Loading theme documents.
//!
//! A document is an object of `themeName -> mapping`. The theme whose name
//! matches [`ThemeSetConfig::default_theme_name`](super::ThemeSetConfig)
//! becomes the parent of every other theme loaded with it.

use super::error::ThemeError;
use super::node::ThemeId;
use super::set::ThemeSet;
use crate::config::{Mapping, Value};

fn json_kind(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl ThemeSet {
    /// Build a set from a theme document mapping, with the default configuration.
    pub fn from_mapping(document: Mapping) -> Self {
        let mut set = ThemeSet::new();
        set.load_mapping(document);
        set
    }

    /// Build a set from parsed JSON, with the default configuration.
    pub fn from_json_value(json: serde_json::Value) -> Result<Self, ThemeError> {
        let mut set = ThemeSet::new();
        set.load_json_value(json)?;
        Ok(set)
    }

    /// Build a set from JSON text, with the default configuration.
    pub fn from_json_str(text: &str) -> Result<Self, ThemeError> {
        let mut set = ThemeSet::new();
        set.load_json_str(text)?;
        Ok(set)
    }

    /// Add every theme in `document` and link them to the default theme.
    ///
    /// Entries that are not mappings are skipped. Themes that already have a
    /// parent keep it. Returns the ids of the added themes in document order.
    pub fn load_mapping(&mut self, document: Mapping) -> Vec<ThemeId> {
        let mut loaded = Vec::with_capacity(document.len());
        for (name, value) in document {
            match value {
                Value::Map(mapping) => loaded.push(self.insert(name, mapping)),
                other => log::warn!("skipping theme {name:?}: expected a mapping, found {}", other.kind()),
            }
        }

        let default = loaded.iter().copied().find(|&id| {
            self.theme(id)
                .is_some_and(|theme| self.config().is_default_theme_name(theme.name()))
        });
        if let Some(default) = default {
            self.set_default(default);
            for &id in &loaded {
                if id == default || self.theme(id).is_some_and(|theme| theme.parent_id().is_some()) {
                    continue;
                }
                self.set_parent(id, Some(default))
                    .unwrap_or_else(|err| log::warn!("could not inherit from the default theme: {err}"));
            }
        }

        log::debug!("loaded {} themes", loaded.len());
        loaded
    }

    /// [`load_mapping`](Self::load_mapping) for parsed JSON.
    pub fn load_json_value(&mut self, json: serde_json::Value) -> Result<Vec<ThemeId>, ThemeError> {
        match json {
            serde_json::Value::Object(object) => Ok(self.load_mapping(Mapping::from_json_object(object))),
            other => Err(ThemeError::NotAMapping(json_kind(&other))),
        }
    }

    /// [`load_mapping`](Self::load_mapping) for JSON text.
    pub fn load_json_str(&mut self, text: &str) -> Result<Vec<ThemeId>, ThemeError> {
        let json: serde_json::Value = serde_json::from_str(text)?;
        self.load_json_value(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;
    use crate::theme::ThemeSetConfig;
    use serde_json::json;

    const DOCUMENT: &str = r##"{
        "Default": {
            "accent": {"hex": "#007AFF"},
            "spacing": 8
        },
        "dark": {
            "accent": {"hex": "#0A84FF"}
        },
        "compact": {
            "spacing": 4
        },
        "version": 2
    }"##;

    #[test]
    fn default_theme_becomes_parent() {
        let set = ThemeSet::from_json_str(DOCUMENT).unwrap();
        assert_eq!(set.len(), 3);

        let default = set.default_theme().unwrap();
        assert_eq!(default.name(), "Default");

        let dark = set.named("dark").unwrap();
        assert_eq!(dark.parent().map(|p| p.id()), Some(default.id()));
        assert_eq!(dark.color_for_key("accent"), Color::rgb(0x0a, 0x84, 0xff));
        assert_eq!(dark.integer_for_key("spacing"), 8);

        let compact = set.named("compact").unwrap();
        assert_eq!(compact.integer_for_key("spacing"), 4);
        assert_eq!(compact.color_for_key("accent"), Color::rgb(0x00, 0x7a, 0xff));
    }

    #[test]
    fn non_mapping_entries_are_skipped() {
        let set = ThemeSet::from_json_str(DOCUMENT).unwrap();
        assert!(set.named("version").is_none());
    }

    #[test]
    fn no_default_theme_means_no_links() {
        let set = ThemeSet::from_json_value(json!({"a": {}, "b": {}})).unwrap();
        assert!(set.default_theme().is_none());
        assert!(set.named("a").unwrap().parent().is_none());
    }

    #[test]
    fn custom_default_name() {
        let mut set = ThemeSet::with_config(ThemeSetConfig::new().with_default_theme_name("base"));
        let ids = set.load_json_value(json!({"base": {"x": 1}, "default": {}})).unwrap();
        assert_eq!(ids.len(), 2);
        assert_eq!(set.default_theme().map(|t| t.name()), Some("base"));
        assert_eq!(set.named("default").unwrap().integer_for_key("x"), 1);
    }

    #[test]
    fn invalid_documents() {
        assert!(matches!(ThemeSet::from_json_str("{"), Err(ThemeError::Parse(_))));
        let err = ThemeSet::from_json_value(json!([1, 2])).unwrap_err();
        assert!(matches!(err, ThemeError::NotAMapping("array")));
        assert_eq!(
            err.to_string(),
            "theme document root must be an object of theme names, found array"
        );
    }

    #[test]
    fn from_mapping_links_programmatic_documents() {
        let document = Mapping::new()
            .with("default", Mapping::new().with("flag", true))
            .with("other", Mapping::new());
        let set = ThemeSet::from_mapping(document);
        assert!(set.named("other").unwrap().bool_for_key("flag"));
    }
}
