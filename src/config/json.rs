//! JSON ingestion: serde_json values → raw configuration values.
//!
//! Theme documents are usually authored as JSON. `null` and arrays are not part
//! of the theme schema; they are dropped on the way in so that unknown shapes
//! never reach coercion.

use crate::config::value::{Mapping, Value};

impl Value {
    /// Convert a JSON value. Returns `None` for `null` and arrays.
    pub fn from_json(json: serde_json::Value) -> Option<Value> {
        match json {
            serde_json::Value::Bool(b) => Some(Value::Bool(b)),
            serde_json::Value::Number(n) => n.as_f64().map(Value::Number),
            serde_json::Value::String(s) => Some(Value::String(s)),
            serde_json::Value::Object(object) => Some(Value::Map(Mapping::from_json_object(object))),
            serde_json::Value::Null | serde_json::Value::Array(_) => None,
        }
    }
}

impl Mapping {
    /// Convert a JSON object, dropping entries that have no raw equivalent.
    pub fn from_json_object(object: serde_json::Map<String, serde_json::Value>) -> Mapping {
        let mut mapping = Mapping::new();
        for (key, json) in object {
            match Value::from_json(json) {
                Some(value) => {
                    mapping.insert(key, value);
                }
                None => log::debug!("ignoring unsupported JSON value for key {key:?}"),
            }
        }
        mapping
    }

    /// Parse JSON text whose root is an object.
    pub fn from_json_str(text: &str) -> Result<Mapping, serde_json::Error> {
        let object: serde_json::Map<String, serde_json::Value> = serde_json::from_str(text)?;
        Ok(Mapping::from_json_object(object))
    }
}
