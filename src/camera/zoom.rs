use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// When player zoom input is allowed to change the orthographic size.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ZoomPolicy {
    /// Zoom input is always applied.
    #[default]
    Always,
    /// Zoom input is applied only while following a live target.
    WhenFollowing,
    /// Zoom input is ignored.
    Never,
}

impl ZoomPolicy {
    /// Whether zoom input applies given the current follow status.
    #[must_use]
    pub fn permits(self, following_target: bool) -> bool {
        match self {
            Self::Always => true,
            Self::WhenFollowing => following_target,
            Self::Never => false,
        }
    }
}

/// Inclusive orthographic size range. `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    min: f32,
    max: f32,
}

impl ZoomLimits {
    /// Build a range from two bounds given in either order.
    #[must_use]
    pub fn new(a: f32, b: f32) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            log::warn!("zoom limits given inverted ({a} > {b}), swapping");
            Self { min: b, max: a }
        }
    }

    /// Lower bound.
    #[must_use]
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Clamp `size` into the range. Never panics; a NaN size maps to `min`.
    #[must_use]
    pub fn clamp(&self, size: f32) -> f32 {
        size.max(self.min).min(self.max)
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self { min: 2.0, max: 20.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_gating() {
        assert!(ZoomPolicy::Always.permits(false));
        assert!(ZoomPolicy::Always.permits(true));
        assert!(!ZoomPolicy::WhenFollowing.permits(false));
        assert!(ZoomPolicy::WhenFollowing.permits(true));
        assert!(!ZoomPolicy::Never.permits(true));
    }

    #[test]
    fn inverted_bounds_are_swapped() {
        let limits = ZoomLimits::new(8.0, 3.0);
        assert_eq!(limits.min(), 3.0);
        assert_eq!(limits.max(), 8.0);
    }

    #[test]
    fn clamp_stays_in_range() {
        let limits = ZoomLimits::new(3.0, 8.0);
        for size in [-100.0, 0.0, 2.9, 3.0, 5.5, 8.0, 8.1, 1e9] {
            let clamped = limits.clamp(size);
            assert!((3.0..=8.0).contains(&clamped), "{size} -> {clamped}");
        }
        assert_eq!(limits.clamp(5.5), 5.5);
        assert_eq!(limits.clamp(f32::NAN), 3.0);
    }

    #[test]
    fn zero_span_pins_size() {
        let limits = ZoomLimits::new(4.0, 4.0);
        assert_eq!(limits.clamp(1.0), 4.0);
        assert_eq!(limits.clamp(10.0), 4.0);
    }
}
