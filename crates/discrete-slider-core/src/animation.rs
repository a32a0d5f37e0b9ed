//! Animated offset transitions.
//!
//! The control never runs an animation loop. It records a transition and the
//! host samples it with its own frame time, repainting while
//! [`OffsetTransition::is_finished`] is false.

use serde::{Deserialize, Serialize};

use crate::error::{SliderError, SliderResult};

/// Duration of committed-value animations, in seconds.
pub const DEFAULT_ANIMATION_DURATION: f64 = 0.35;

/// Timing curve of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// Cubic Bézier (0.42, 0, 0.58, 1).
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` to eased progress.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
        }
    }
}

/// Evaluate a CSS-style cubic Bézier timing curve at time `t`.
///
/// Finds the curve parameter whose x equals `t` with a few Newton steps,
/// falling back to bisection where the slope is flat, then returns its y.
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, t: f64) -> f64 {
    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;
    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let sample_x = |s: f64| ((ax * s + bx) * s + cx) * s;
    let sample_y = |s: f64| ((ay * s + by) * s + cy) * s;
    let slope_x = |s: f64| (3.0 * ax * s + 2.0 * bx) * s + cx;

    let mut s = t;
    for _ in 0..8 {
        let err = sample_x(s) - t;
        if err.abs() < 1e-7 {
            return sample_y(s);
        }
        let d = slope_x(s);
        if d.abs() < 1e-6 {
            break;
        }
        s -= err / d;
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    s = t;
    while hi - lo > 1e-7 {
        let x = sample_x(s);
        if (x - t).abs() < 1e-7 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    sample_y(s)
}

/// How a committed-value change animates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSpec {
    /// Duration in seconds.
    pub duration: f64,
    /// Timing curve.
    pub easing: Easing,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            duration: DEFAULT_ANIMATION_DURATION,
            easing: Easing::EaseInOut,
        }
    }
}

impl AnimationSpec {
    /// Check that the duration is usable.
    pub fn validate(&self) -> SliderResult<()> {
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(SliderError::InvalidAnimationDuration(self.duration));
        }
        Ok(())
    }
}

/// A handle offset moving from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetTransition {
    pub from: f64,
    pub to: f64,
    /// Host time (seconds) when the transition began.
    pub started_at: f64,
    pub spec: AnimationSpec,
}

impl OffsetTransition {
    /// Start a transition at `now`.
    pub fn new(from: f64, to: f64, now: f64, spec: AnimationSpec) -> Self {
        Self {
            from,
            to,
            started_at: now,
            spec,
        }
    }

    /// Linear progress in `[0, 1]` at `now`.
    pub fn progress(&self, now: f64) -> f64 {
        if self.spec.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.started_at) / self.spec.duration).clamp(0.0, 1.0)
    }

    /// Offset at `now`.
    pub fn sample(&self, now: f64) -> f64 {
        let eased = self.spec.easing.apply(self.progress(now));
        self.from + (self.to - self.from) * eased
    }

    /// Check if the transition has reached its target.
    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }
}
