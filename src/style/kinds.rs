//! Keyword enums: text case, alignment, line breaking, status bar, keyboard,
//! animation curve.
//!
//! Every enum is parsed from a case-insensitive keyword. Unrecognised keywords
//! are not an error at this level; callers fall back to [`Default`].

/// An enum that can be spelled as a keyword in a theme document.
pub trait Keyword: Sized + Copy + Default {
    /// Human-readable name of the enum, used in diagnostics.
    const NAME: &'static str;

    /// Parse a keyword. Matching is case-insensitive.
    fn from_keyword(keyword: &str) -> Option<Self>;
}

/// Case transform applied to label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextCaseTransform {
    #[default]
    None,
    Upper,
    Lower,
}

impl TextCaseTransform {
    /// Apply the transform to `text`, returning a new string.
    pub fn apply(self, text: &str) -> String {
        match self {
            TextCaseTransform::None => text.to_owned(),
            TextCaseTransform::Upper => text.to_uppercase(),
            TextCaseTransform::Lower => text.to_lowercase(),
        }
    }
}

impl Keyword for TextCaseTransform {
    const NAME: &'static str = "text case transform";

    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.trim().to_ascii_lowercase().as_str() {
            "uppercase" | "upper" => Some(TextCaseTransform::Upper),
            "lowercase" | "lower" => Some(TextCaseTransform::Lower),
            "none" => Some(TextCaseTransform::None),
            _ => None,
        }
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlignment {
    Left,
    Center,
    Right,
    Justified,
    /// Follows the writing direction of the text.
    #[default]
    Natural,
}

impl Keyword for TextAlignment {
    const NAME: &'static str = "text alignment";

    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.trim().to_ascii_lowercase().as_str() {
            "left" => Some(TextAlignment::Left),
            "center" => Some(TextAlignment::Center),
            "right" => Some(TextAlignment::Right),
            "justified" => Some(TextAlignment::Justified),
            "natural" => Some(TextAlignment::Natural),
            _ => None,
        }
    }
}

/// How lines are broken or truncated when text overflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineBreakMode {
    #[default]
    WordWrap,
    CharWrap,
    Clip,
    TruncateHead,
    TruncateTail,
    TruncateMiddle,
}

impl Keyword for LineBreakMode {
    const NAME: &'static str = "line break mode";

    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.trim().to_ascii_lowercase().as_str() {
            "wordwrap" => Some(LineBreakMode::WordWrap),
            "charwrap" => Some(LineBreakMode::CharWrap),
            "clip" => Some(LineBreakMode::Clip),
            "truncatehead" => Some(LineBreakMode::TruncateHead),
            "truncatetail" => Some(LineBreakMode::TruncateTail),
            "truncatemiddle" => Some(LineBreakMode::TruncateMiddle),
            _ => None,
        }
    }
}

/// Status bar content style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusBarStyle {
    /// Dark content, the platform default.
    #[default]
    Default,
    LightContent,
}

impl Keyword for StatusBarStyle {
    const NAME: &'static str = "status bar style";

    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.trim().to_ascii_lowercase().as_str() {
            "darkcontent" | "default" => Some(StatusBarStyle::Default),
            "lightcontent" => Some(StatusBarStyle::LightContent),
            _ => None,
        }
    }
}

/// Appearance of the on-screen keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyboardAppearance {
    #[default]
    Default,
    Dark,
    Light,
}

impl Keyword for KeyboardAppearance {
    const NAME: &'static str = "keyboard appearance";

    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.trim().to_ascii_lowercase().as_str() {
            "default" => Some(KeyboardAppearance::Default),
            "dark" => Some(KeyboardAppearance::Dark),
            "light" => Some(KeyboardAppearance::Light),
            _ => None,
        }
    }
}

/// Timing curve of an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationCurve {
    #[default]
    EaseInOut,
    EaseOut,
    EaseIn,
    Linear,
}

impl AnimationCurve {
    /// Map linear progress `t` in `[0, 1]` to eased progress in `[0, 1]`.
    ///
    /// Input outside the range is clamped.
    pub fn ease(self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            AnimationCurve::Linear => t,
            AnimationCurve::EaseIn => t * t,
            AnimationCurve::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            AnimationCurve::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }
}

impl Keyword for AnimationCurve {
    const NAME: &'static str = "animation curve";

    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.trim().to_ascii_lowercase().as_str() {
            "easeinout" => Some(AnimationCurve::EaseInOut),
            "easeout" => Some(AnimationCurve::EaseOut),
            "easein" => Some(AnimationCurve::EaseIn),
            "linear" => Some(AnimationCurve::Linear),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_case_keywords() {
        assert_eq!(TextCaseTransform::from_keyword("UPPERCASE"), Some(TextCaseTransform::Upper));
        assert_eq!(TextCaseTransform::from_keyword("lower"), Some(TextCaseTransform::Lower));
        assert_eq!(TextCaseTransform::from_keyword("title"), None);
        assert_eq!(TextCaseTransform::default(), TextCaseTransform::None);
    }

    #[test]
    fn text_case_apply() {
        assert_eq!(TextCaseTransform::Upper.apply("Hello"), "HELLO");
        assert_eq!(TextCaseTransform::Lower.apply("Hello"), "hello");
        assert_eq!(TextCaseTransform::None.apply("Hello"), "Hello");
    }

    #[test]
    fn text_case_apply_unicode() {
        assert_eq!(TextCaseTransform::Upper.apply("straße"), "STRASSE");
    }

    #[test]
    fn alignment_keywords() {
        assert_eq!(TextAlignment::from_keyword("Center"), Some(TextAlignment::Center));
        assert_eq!(TextAlignment::from_keyword("justified"), Some(TextAlignment::Justified));
        assert_eq!(TextAlignment::from_keyword("middle"), None);
        assert_eq!(TextAlignment::default(), TextAlignment::Natural);
    }

    #[test]
    fn line_break_keywords() {
        assert_eq!(LineBreakMode::from_keyword("TruncateMiddle"), Some(LineBreakMode::TruncateMiddle));
        assert_eq!(LineBreakMode::from_keyword("clip"), Some(LineBreakMode::Clip));
        assert_eq!(LineBreakMode::from_keyword("ellipsis"), None);
        assert_eq!(LineBreakMode::default(), LineBreakMode::WordWrap);
    }

    #[test]
    fn status_bar_keywords() {
        assert_eq!(StatusBarStyle::from_keyword("lightContent"), Some(StatusBarStyle::LightContent));
        assert_eq!(StatusBarStyle::from_keyword("darkcontent"), Some(StatusBarStyle::Default));
        assert_eq!(StatusBarStyle::from_keyword("purple"), None);
    }

    #[test]
    fn keyboard_keywords() {
        assert_eq!(KeyboardAppearance::from_keyword("DARK"), Some(KeyboardAppearance::Dark));
        assert_eq!(KeyboardAppearance::from_keyword("light"), Some(KeyboardAppearance::Light));
        assert_eq!(KeyboardAppearance::default(), KeyboardAppearance::Default);
    }

    #[test]
    fn curve_keywords() {
        assert_eq!(AnimationCurve::from_keyword("EaseIn"), Some(AnimationCurve::EaseIn));
        assert_eq!(AnimationCurve::from_keyword("linear"), Some(AnimationCurve::Linear));
        assert_eq!(AnimationCurve::from_keyword("bounce"), None);
        assert_eq!(AnimationCurve::default(), AnimationCurve::EaseInOut);
    }

    #[test]
    fn curve_endpoints_are_fixed() {
        for curve in [
            AnimationCurve::Linear,
            AnimationCurve::EaseIn,
            AnimationCurve::EaseOut,
            AnimationCurve::EaseInOut,
        ] {
            assert_eq!(curve.ease(0.0), 0.0, "{curve:?}");
            assert_eq!(curve.ease(1.0), 1.0, "{curve:?}");
        }
    }

    #[test]
    fn curve_shapes() {
        assert_eq!(AnimationCurve::Linear.ease(0.25), 0.25);
        assert!(AnimationCurve::EaseIn.ease(0.5) < 0.5);
        assert!(AnimationCurve::EaseOut.ease(0.5) > 0.5);
        assert_eq!(AnimationCurve::EaseInOut.ease(0.5), 0.5);
    }

    #[test]
    fn curve_clamps_input() {
        assert_eq!(AnimationCurve::Linear.ease(-1.0), 0.0);
        assert_eq!(AnimationCurve::Linear.ease(3.0), 1.0);
        assert_eq!(AnimationCurve::EaseIn.ease(f32::NAN), 0.0);
    }
}
