//! Easing curves for camera sweeps.
//!
//! A sweep tracks its progress as a fraction of its duration; the easing
//! curve maps that fraction onto the interpolation weight used for position,
//! size and rotation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for sweep curves.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Hermite smooth-step: `t²(3 − 2t)`. Slow start, slow end.
    SmoothStep,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
}

impl EasingFunction {
    /// Default sweep curve.
    pub const DEFAULT: EasingFunction = EasingFunction::SmoothStep;

    /// Evaluate the easing function at progress `t`.
    ///
    /// Input is clamped to [0.0, 1.0], so the result is too. Both endpoints
    /// map exactly onto themselves for every variant.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        // NaN falls through `clamp` unchanged; treat it as "not started"
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        match self {
            EasingFunction::Linear => t,
            EasingFunction::SmoothStep => t * t * (3.0 - 2.0 * t),
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}
