//! Color: 8-bit RGB with a float alpha, parsed from six-digit hex strings.

use std::fmt;

/// A resolved color.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    /// Opacity in `[0, 1]`.
    pub alpha: f32,
}

impl Color {
    /// Opaque black. Also the fallback for malformed color data.
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Fully transparent black.
    pub const CLEAR: Color = Color { red: 0, green: 0, blue: 0, alpha: 0.0 };

    /// Create an opaque color.
    #[inline]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue, alpha: 1.0 }
    }

    /// Return the same color with a different alpha, clamped to `[0, 1]`.
    ///
    /// A NaN alpha is treated as fully opaque.
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Self {
        let alpha = if alpha.is_nan() { 1.0 } else { alpha.clamp(0.0, 1.0) };
        Self { alpha, ..self }
    }

    /// Parse `RRGGBB` or `#RRGGBB`, case-insensitive, surrounding whitespace
    /// ignored. Anything else (wrong length, non-hex digits) is `None`.
    pub fn from_hex(hex: &str) -> Option<Color> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Channels as floats in `[0, 1]`, handy for GPU-style renderers.
    pub fn components(self) -> [f32; 4] {
        [
            self.red as f32 / 255.0,
            self.green as f32 / 255.0,
            self.blue as f32 / 255.0,
            self.alpha,
        ]
    }

    /// Whether the color is fully transparent.
    pub fn is_clear(self) -> bool {
        self.alpha == 0.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// Formats as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)?;
        if self.alpha < 1.0 {
            write!(f, "{:02x}", (self.alpha * 255.0).round() as u8)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_accepts_optional_hash_and_any_case() {
        let expected = Color::rgb(0x1A, 0x2B, 0x3C);
        assert_eq!(Color::from_hex("1A2B3C"), Some(expected));
        assert_eq!(Color::from_hex("#1a2b3c"), Some(expected));
        assert_eq!(Color::from_hex("  #1A2b3C "), Some(expected));
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        assert_eq!(Color::from_hex(""), None);
        assert_eq!(Color::from_hex("#FFF"), None);
        assert_eq!(Color::from_hex("1A2B3C4D"), None);
        assert_eq!(Color::from_hex("##1A2B3C"), None);
    }

    #[test]
    fn from_hex_rejects_non_hex_digits() {
        assert_eq!(Color::from_hex("ZZZZZZ"), None);
        assert_eq!(Color::from_hex("12345G"), None);
        assert_eq!(Color::from_hex("+12345"), None);
    }

    #[test]
    fn from_hex_rejects_multibyte_input() {
        assert_eq!(Color::from_hex("ééé"), None);
    }

    #[test]
    fn with_alpha_clamps() {
        assert_eq!(Color::WHITE.with_alpha(0.5).alpha, 0.5);
        assert_eq!(Color::WHITE.with_alpha(2.0).alpha, 1.0);
        assert_eq!(Color::WHITE.with_alpha(-1.0).alpha, 0.0);
        assert_eq!(Color::WHITE.with_alpha(f32::NAN).alpha, 1.0);
    }

    #[test]
    fn components_normalised() {
        assert_eq!(Color::WHITE.components(), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(Color::CLEAR.components(), [0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn display_formats_hex() {
        assert_eq!(Color::rgb(0x1A, 0x2B, 0x3C).to_string(), "#1a2b3c");
        assert_eq!(Color::rgb(255, 0, 0).with_alpha(0.5).to_string(), "#ff000080");
    }

    #[test]
    fn default_is_black() {
        assert_eq!(Color::default(), Color::BLACK);
        assert!(!Color::BLACK.is_clear());
        assert!(Color::CLEAR.is_clear());
    }
}
