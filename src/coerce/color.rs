//! Color coercion from `{hex, alpha}` mappings.

use std::fmt;

use super::{resolve, scalar, CoercionError};
use crate::config::Value;
use crate::style::Color;

/// Coerce a `{hex, alpha}` mapping to a [`Color`].
///
/// `hex` is six hex digits with an optional `#`. `alpha` defaults to 1 and is
/// clamped to `[0, 1]`. A mapping with no `hex` and `alpha: 0` is
/// [`Color::CLEAR`].
pub fn to_color(value: Option<&Value>) -> Result<Color, CoercionError> {
    let value = value.ok_or(CoercionError::MissingKey)?;
    let map = value.as_map().ok_or_else(|| CoercionError::MalformedColor {
        reason: format!("expected a mapping, found {}", value.kind()),
    })?;

    let alpha = match map.get("alpha") {
        None => 1.0,
        Some(alpha) => scalar::to_f64(Some(alpha)).map_err(|_| CoercionError::MalformedColor {
            reason: format!("alpha is not a number: {alpha}"),
        })? as f32,
    };

    match map.get("hex") {
        None if alpha == 0.0 => Ok(Color::CLEAR),
        None => Err(CoercionError::MalformedColor { reason: "missing hex".to_owned() }),
        Some(Value::String(hex)) => Color::from_hex(hex)
            .map(|color| color.with_alpha(alpha))
            .ok_or_else(|| CoercionError::MalformedColor {
                reason: format!("{hex:?} is not six hex digits"),
            }),
        Some(other) => Err(CoercionError::MalformedColor {
            reason: format!("hex must be a string, found {}", other.kind()),
        }),
    }
}

/// Coerce to a color, using `fallback` for absent or malformed input.
pub fn color_or(value: Option<&Value>, key: impl fmt::Display, fallback: Color) -> Color {
    resolve(key, to_color(value), || fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Mapping;

    fn color(entries: Mapping) -> Result<Color, CoercionError> {
        to_color(Some(&Value::Map(entries)))
    }

    #[test]
    fn hex_with_alpha() {
        let parsed = color(Mapping::new().with("hex", "1A2B3C").with("alpha", 0.5));
        assert_eq!(parsed, Ok(Color::rgb(0x1a, 0x2b, 0x3c).with_alpha(0.5)));
    }

    #[test]
    fn hex_prefix_and_case_do_not_matter() {
        let upper = color(Mapping::new().with("hex", "1A2B3C").with("alpha", 0.5));
        let lower = color(Mapping::new().with("hex", "#1a2b3c").with("alpha", 0.5));
        assert_eq!(upper, lower);
    }

    #[test]
    fn alpha_defaults_to_opaque_and_clamps() {
        assert_eq!(color(Mapping::new().with("hex", "FFFFFF")), Ok(Color::WHITE));
        assert_eq!(color(Mapping::new().with("hex", "FFFFFF").with("alpha", 4)), Ok(Color::WHITE));
    }

    #[test]
    fn clear_without_hex() {
        assert_eq!(color(Mapping::new().with("alpha", 0)), Ok(Color::CLEAR));
    }

    #[test]
    fn malformed_inputs() {
        for entries in [
            Mapping::new().with("hex", "ZZZZZZ"),
            Mapping::new().with("hex", "FFF"),
            Mapping::new().with("hex", 123456),
            Mapping::new().with("hex", "FFFFFF").with("alpha", "opaque"),
            Mapping::new().with("alpha", 0.5),
        ] {
            assert!(
                matches!(color(entries.clone()), Err(CoercionError::MalformedColor { .. })),
                "{entries:?}"
            );
        }
        assert!(matches!(
            to_color(Some(&Value::from("#FFFFFF"))),
            Err(CoercionError::MalformedColor { .. })
        ));
    }

    #[test]
    fn fallback_is_deterministic() {
        let bad = Value::Map(Mapping::new().with("hex", "ZZZZZZ"));
        let first = color_or(Some(&bad), "tint", Color::BLACK);
        let second = color_or(Some(&bad), "tint", Color::BLACK);
        assert_eq!(first, Color::BLACK);
        assert_eq!(first, second);
        assert_eq!(color_or(None, "tint", Color::WHITE), Color::WHITE);
    }
}
