//! Raw configuration model: tagged values, ordered mappings, JSON ingestion.

pub mod json;
pub mod value;

pub use value::{Mapping, Value, KEY_PATH_SEPARATOR};
