//! Slide Transition
//!
//! When the active item changes, tiles don't jump: a surface adds a shrinking
//! displacement to every tile's offset so the row glides into its new
//! position. The core only describes the motion; surfaces decide how to draw
//! fractional positions.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Easing curve applied to transition progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingFunction {
    /// Constant speed
    Linear,
    /// Slow start and end (cubic)
    #[default]
    EaseInOut,
}

impl EasingFunction {
    /// Map linear progress `t` (clamped to 0..=1) through the curve
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// An in-flight slide between two active indices
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideTransition {
    /// Signed offset of the new active index from the old one
    pub shift: i32,
    /// When the change happened
    pub started: Instant,
    /// How long the slide lasts
    pub duration: Duration,
    /// Curve used for progress
    pub easing: EasingFunction,
}

impl SlideTransition {
    /// Start a slide of `shift` positions now
    #[must_use]
    pub fn new(shift: i32, duration: Duration, started: Instant) -> Self {
        Self {
            shift,
            started,
            duration,
            easing: EasingFunction::EaseInOut,
        }
    }

    /// Use a different easing curve
    #[must_use]
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Eased progress in `0.0..=1.0`
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        self.easing
            .apply(elapsed.as_secs_f32() / self.duration.as_secs_f32())
    }

    /// Whether the slide has finished
    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }

    /// Extra offset to add to every tile at `now`
    ///
    /// Starts at `shift` (tiles still where they were) and decays to zero.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn displacement(&self, now: Instant) -> f32 {
        self.shift as f32 * (1.0 - self.progress(now))
    }
}
