//! Scalar coercions: numbers, booleans, strings, durations, keywords.

use std::fmt;
use std::time::Duration;

use super::{resolve, CoercionError};
use crate::config::Value;
use crate::style::Keyword;

/// Coerce to a finite `f64`.
///
/// Accepts numbers, booleans (1 / 0) and numeric strings.
pub fn to_f64(value: Option<&Value>) -> Result<f64, CoercionError> {
    let value = value.ok_or(CoercionError::MissingKey)?;
    let number = match value {
        Value::Number(n) => Some(*n),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Map(_) => None,
    };
    match number {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(CoercionError::malformed("number", value)),
    }
}

/// Coerce to an integer, truncating toward zero.
pub fn to_integer(value: Option<&Value>) -> Result<i64, CoercionError> {
    to_f64(value).map(|n| n.trunc() as i64)
}

/// Coerce to a boolean.
///
/// Accepts booleans, numbers (non-zero is true) and the strings
/// `true`/`yes`/`1` and `false`/`no`/`0`, case-insensitive.
pub fn to_bool(value: Option<&Value>) -> Result<bool, CoercionError> {
    let value = value.ok_or(CoercionError::MissingKey)?;
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => Ok(*n != 0.0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(true),
            "false" | "no" | "0" | "" => Ok(false),
            _ => Err(CoercionError::malformed("boolean", value)),
        },
        Value::Map(_) => Err(CoercionError::malformed("boolean", value)),
    }
}

/// Coerce to a string. Numbers and booleans use their display form.
pub fn to_string(value: Option<&Value>) -> Result<String, CoercionError> {
    let value = value.ok_or(CoercionError::MissingKey)?;
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Map(_) => Err(CoercionError::malformed("string", value)),
    }
}

/// Coerce a number of seconds to a [`Duration`]. Negative durations, and
/// ones too long to represent, are malformed.
pub fn to_duration(value: Option<&Value>) -> Result<Duration, CoercionError> {
    let seconds = to_f64(value)?;
    if seconds < 0.0 {
        return Err(CoercionError::MalformedValue {
            expected: "non-negative seconds",
            found: seconds.to_string(),
        });
    }
    Duration::try_from_secs_f64(seconds).map_err(|_| CoercionError::MalformedValue {
        expected: "seconds within the duration range",
        found: seconds.to_string(),
    })
}

/// Coerce a keyword string to the enum `K`.
pub fn to_keyword<K: Keyword>(value: Option<&Value>) -> Result<K, CoercionError> {
    let value = value.ok_or(CoercionError::MissingKey)?;
    value
        .as_str()
        .and_then(K::from_keyword)
        .ok_or_else(|| CoercionError::malformed(K::NAME, value))
}

// ---------------------------------------------------------------------------
// Fallback wrappers
// ---------------------------------------------------------------------------

pub fn f64_or_default(value: Option<&Value>, key: impl fmt::Display) -> f64 {
    resolve(key, to_f64(value), || 0.0)
}

pub fn f32_or_default(value: Option<&Value>, key: impl fmt::Display) -> f32 {
    f64_or_default(value, key) as f32
}

pub fn integer_or_default(value: Option<&Value>, key: impl fmt::Display) -> i64 {
    resolve(key, to_integer(value), || 0)
}

pub fn bool_or_default(value: Option<&Value>, key: impl fmt::Display) -> bool {
    resolve(key, to_bool(value), || false)
}

pub fn string_or_default(value: Option<&Value>, key: impl fmt::Display) -> String {
    resolve(key, to_string(value), String::new)
}

pub fn duration_or_default(value: Option<&Value>, key: impl fmt::Display) -> Duration {
    resolve(key, to_duration(value), || Duration::ZERO)
}

pub fn keyword_or_default<K: Keyword>(value: Option<&Value>, key: impl fmt::Display) -> K {
    resolve(key, to_keyword(value), K::default)
}
