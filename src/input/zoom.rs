//! Converts wheel and pinch input into a single zoom delta per frame.

use glam::Vec2;

use super::sample::PointerSample;

/// Stateful wheel/pinch to zoom-delta converter.
///
/// The returned delta is in orthographic-size units: positive zooms out
/// (grows the visible area), negative zooms in.
///
/// A pinch needs one baseline frame before it produces deltas, so the first
/// frame of every new two-finger gesture yields `0.0` instead of jumping
/// relative to a stale pair from an earlier gesture.
#[derive(Debug, Clone, Default)]
pub struct ZoomInputNormalizer {
    /// Touch pair from the previous call, present only while a two-point
    /// gesture has been active on consecutive calls.
    last_touch_pair: Option<[Vec2; 2]>,
}

impl ZoomInputNormalizer {
    /// Create a normalizer with no gesture history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a two-point gesture was active on the previous call.
    #[must_use]
    pub fn gesture_active(&self) -> bool {
        self.last_touch_pair.is_some()
    }

    /// Forget any gesture baseline.
    pub fn reset(&mut self) {
        self.last_touch_pair = None;
    }

    /// Compute this frame's zoom delta.
    ///
    /// Pinch takes priority over the wheel. A wheel notch maps to exactly
    /// `wheel_snap` regardless of its magnitude; a positive wheel delta zooms
    /// in. A zero `wheel_snap` or `pinch_sensitivity` disables that source.
    pub fn sample(
        &mut self,
        wheel_snap: f32,
        pinch_sensitivity: f32,
        input: &PointerSample,
    ) -> f32 {
        if input.touch_supported && pinch_sensitivity != 0.0 {
            if let Some(pair) = input.touch_pair() {
                return self.pinch_delta(pair, pinch_sensitivity);
            }
        }
        self.last_touch_pair = None;

        if input.pointer_present
            && wheel_snap != 0.0
            && input.wheel_delta != 0.0
        {
            return if input.wheel_delta > 0.0 {
                -wheel_snap
            } else {
                wheel_snap
            };
        }

        0.0
    }

    fn pinch_delta(&mut self, pair: [Vec2; 2], sensitivity: f32) -> f32 {
        let delta = self.last_touch_pair.map_or(0.0, |last| {
            let old_distance = last[0].distance(last[1]);
            let new_distance = pair[0].distance(pair[1]);
            (old_distance - new_distance) * sensitivity
        });
        self.last_touch_pair = Some(pair);
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(distance: f32) -> PointerSample {
        PointerSample::touches(&[Vec2::ZERO, Vec2::new(distance, 0.0)])
    }

    #[test]
    fn wheel_maps_to_snap() {
        let mut zoom = ZoomInputNormalizer::new();
        assert_eq!(zoom.sample(0.5, 0.0, &PointerSample::wheel(3.0)), -0.5);
        assert_eq!(zoom.sample(0.5, 0.0, &PointerSample::wheel(-0.1)), 0.5);
        assert_eq!(zoom.sample(0.5, 0.0, &PointerSample::wheel(0.0)), 0.0);
    }

    #[test]
    fn wheel_ignored_without_pointer_or_snap() {
        let mut zoom = ZoomInputNormalizer::new();
        let mut no_pointer = PointerSample::wheel(1.0);
        no_pointer.pointer_present = false;
        assert_eq!(zoom.sample(0.5, 0.0, &no_pointer), 0.0);
        assert_eq!(zoom.sample(0.0, 0.0, &PointerSample::wheel(1.0)), 0.0);
    }

    #[test]
    fn single_pinch_sample_is_baseline_only() {
        let mut zoom = ZoomInputNormalizer::new();
        assert_eq!(zoom.sample(0.0, 0.1, &pair(100.0)), 0.0);
        assert!(zoom.gesture_active());
        assert_eq!(zoom.sample(0.0, 0.1, &PointerSample::idle()), 0.0);
        assert!(!zoom.gesture_active());
    }

    #[test]
    fn pinch_continuation_uses_distance_change() {
        let mut zoom = ZoomInputNormalizer::new();
        let _ = zoom.sample(0.0, 0.02, &pair(100.0));
        // Fingers spread 100 -> 150: zoom in by 50 × 0.02
        let delta = zoom.sample(0.0, 0.02, &pair(150.0));
        assert!((delta - -1.0).abs() < 1e-6);
        // Fingers close 150 -> 120: zoom out by 30 × 0.02
        let delta = zoom.sample(0.0, 0.02, &pair(120.0));
        assert!((delta - 0.6).abs() < 1e-6);
    }

    #[test]
    fn pinch_distance_is_euclidean() {
        let mut zoom = ZoomInputNormalizer::new();
        let first =
            PointerSample::touches(&[Vec2::new(1.0, 1.0), Vec2::new(4.0, 5.0)]);
        let second =
            PointerSample::touches(&[Vec2::ZERO, Vec2::new(6.0, 8.0)]);
        let _ = zoom.sample(0.0, 1.0, &first);
        // 5 -> 10
        assert!((zoom.sample(0.0, 1.0, &second) - -5.0).abs() < 1e-6);
    }

    #[test]
    fn resumed_pinch_needs_new_baseline() {
        let mut zoom = ZoomInputNormalizer::new();
        let _ = zoom.sample(0.0, 1.0, &pair(10.0));
        let _ = zoom.sample(0.0, 1.0, &pair(20.0));
        // One finger lifted.
        let one = PointerSample::touches(&[Vec2::ZERO]);
        assert_eq!(zoom.sample(0.0, 1.0, &one), 0.0);
        // Pinch resumes far apart; no jump against the stale pair.
        assert_eq!(zoom.sample(0.0, 1.0, &pair(500.0)), 0.0);
        assert_eq!(zoom.sample(0.0, 1.0, &pair(490.0)), 10.0);
    }

    #[test]
    fn pinch_takes_priority_over_wheel() {
        let mut zoom = ZoomInputNormalizer::new();
        let mut both = pair(10.0);
        both.pointer_present = true;
        both.wheel_delta = 1.0;
        assert_eq!(zoom.sample(0.5, 1.0, &both), 0.0);
    }

    #[test]
    fn pinch_disabled_falls_back_to_wheel() {
        let mut zoom = ZoomInputNormalizer::new();
        let mut both = pair(10.0);
        both.pointer_present = true;
        both.wheel_delta = -2.0;
        assert_eq!(zoom.sample(0.5, 0.0, &both), 0.5);
        assert!(!zoom.gesture_active());

        both.touch_supported = false;
        assert_eq!(zoom.sample(0.5, 1.0, &both), 0.5);
        assert!(!zoom.gesture_active());
    }

    #[test]
    fn three_touches_are_not_a_pinch() {
        let mut zoom = ZoomInputNormalizer::new();
        let _ = zoom.sample(0.0, 1.0, &pair(10.0));
        let three = PointerSample::touches(&[
            Vec2::ZERO,
            Vec2::X,
            Vec2::Y,
        ]);
        assert_eq!(zoom.sample(0.0, 1.0, &three), 0.0);
        assert!(!zoom.gesture_active());
    }

    #[test]
    fn reset_clears_baseline() {
        let mut zoom = ZoomInputNormalizer::new();
        let _ = zoom.sample(0.0, 1.0, &pair(10.0));
        zoom.reset();
        assert_eq!(zoom.sample(0.0, 1.0, &pair(50.0)), 0.0);
    }
}
