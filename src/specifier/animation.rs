//! AnimationSpecifier: delay, duration and timing curve.

use std::time::Duration;

use super::Fields;
use crate::config::Mapping;
use crate::style::AnimationCurve;
use crate::theme::ThemeSetConfig;

/// Parameters of a timed transition. Fields: `delay`, `duration` (seconds), `curve`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationSpecifier {
    pub delay: Duration,
    pub duration: Duration,
    pub curve: AnimationCurve,
}

impl AnimationSpecifier {
    /// Build from a theme sub-mapping.
    pub fn from_mapping(map: &Mapping, config: &ThemeSetConfig) -> Self {
        Self::from_fields(&Fields::new(map, "", config))
    }

    pub(crate) fn from_fields(fields: &Fields<'_>) -> Self {
        Self {
            delay: fields.duration("delay"),
            duration: fields.duration("duration"),
            curve: fields.keyword("curve"),
        }
    }

    /// Delay plus duration, saturating at [`Duration::MAX`].
    pub fn total(&self) -> Duration {
        self.delay.saturating_add(self.duration)
    }

    /// Eased progress in `[0, 1]` at `elapsed` since the animation was scheduled.
    ///
    /// Progress is 0 until the delay has passed and 1 once the duration has.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        let Some(running) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() || running >= self.duration {
            return 1.0;
        }
        let t = running.as_secs_f32() / self.duration.as_secs_f32();
        self.curve.ease(t)
    }
}
