//! Timed interpolation of the full camera pose.

use super::state::CameraState;
use crate::util::easing::EasingFunction;

/// Callback fired once when a sweep reaches its target.
pub type SweepCallback = Box<dyn FnOnce()>;

/// Result of advancing a sweep by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SweepStep {
    /// Still interpolating; the pose to apply this frame.
    InProgress(CameraState),
    /// Reached the target; the pose equals the target exactly.
    Finished(CameraState),
}

/// An in-flight transition from a captured start pose to a target pose.
pub struct Sweep {
    start: CameraState,
    target: CameraState,
    /// Progress as a fraction of `duration`, not absolute time.
    elapsed: f32,
    duration: f32,
    easing: EasingFunction,
    on_finish: Option<SweepCallback>,
}

impl Sweep {
    /// Start a sweep from `start` to `target` over `duration` seconds.
    #[must_use]
    pub fn new(
        start: CameraState,
        target: CameraState,
        duration: f32,
        easing: EasingFunction,
        on_finish: Option<SweepCallback>,
    ) -> Self {
        Self {
            start,
            target,
            elapsed: 0.0,
            duration,
            easing,
            on_finish,
        }
    }

    /// Pose the sweep ends at.
    #[must_use]
    pub fn target(&self) -> &CameraState {
        &self.target
    }

    /// Progress as a fraction of the duration (may exceed 1.0).
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.elapsed
    }

    /// Advance by `dt` seconds and return the pose to apply.
    ///
    /// A non-positive or non-finite duration jumps straight to the target.
    /// The sweep finishes once progress reaches 1.0, or earlier if the
    /// interpolated pose already equals the target.
    pub fn step(&mut self, dt: f32) -> SweepStep {
        if !(self.duration > 0.0 && self.duration.is_finite()) {
            self.elapsed = 1.0;
            return SweepStep::Finished(self.target);
        }

        self.elapsed += dt / self.duration;
        if self.elapsed >= 1.0 {
            return SweepStep::Finished(self.target);
        }

        let t = self.easing.evaluate(self.elapsed);
        let pose = self.start.interpolate(&self.target, t);
        if pose == self.target {
            SweepStep::Finished(self.target)
        } else {
            SweepStep::InProgress(pose)
        }
    }

    /// Take the completion callback, leaving none behind.
    pub fn take_callback(&mut self) -> Option<SweepCallback> {
        self.on_finish.take()
    }
}

impl std::fmt::Debug for Sweep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sweep")
            .field("start", &self.start)
            .field("target", &self.target)
            .field("elapsed", &self.elapsed)
            .field("duration", &self.duration)
            .field("easing", &self.easing)
            .field("has_callback", &self.on_finish.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn sweep(duration: f32) -> Sweep {
        Sweep::new(
            CameraState::new(Vec3::new(0.0, 0.0, -10.0), 2.0),
            CameraState::new(Vec3::new(10.0, 0.0, -10.0), 6.0),
            duration,
            EasingFunction::SmoothStep,
            None,
        )
    }

    #[test]
    fn halfway_is_eased_midpoint() {
        let mut s = sweep(2.0);
        let SweepStep::InProgress(pose) = s.step(1.0) else {
            panic!("sweep finished early");
        };
        assert!((pose.position.x - 5.0).abs() < 1e-5);
        assert!((pose.size - 4.0).abs() < 1e-5);
        assert_eq!(s.progress(), 0.5);
    }

    #[test]
    fn quarter_uses_smooth_step() {
        let mut s = sweep(4.0);
        let SweepStep::InProgress(pose) = s.step(1.0) else {
            panic!("sweep finished early");
        };
        // smoothstep(0.25) = 0.15625
        assert!((pose.position.x - 1.5625).abs() < 1e-4);
    }

    #[test]
    fn overshoot_finishes_on_target() {
        let mut s = sweep(1.0);
        assert_eq!(s.step(1.5), SweepStep::Finished(*s.target()));
    }

    #[test]
    fn zero_and_negative_durations_finish_immediately() {
        for duration in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let mut s = sweep(duration);
            assert!(
                matches!(s.step(0.016), SweepStep::Finished(_)),
                "duration {duration}"
            );
        }
    }

    #[test]
    fn zero_dt_freezes_progress() {
        let mut s = sweep(1.0);
        let _ = s.step(0.0);
        let _ = s.step(0.0);
        assert_eq!(s.progress(), 0.0);
    }

    #[test]
    fn identical_start_and_target_finish_on_first_step() {
        let state = CameraState::default();
        let mut s =
            Sweep::new(state, state, 3.0, EasingFunction::SmoothStep, None);
        assert_eq!(s.step(0.01), SweepStep::Finished(state));
    }

    #[test]
    fn callback_can_be_taken_once() {
        let mut s = Sweep::new(
            CameraState::default(),
            CameraState::default(),
            1.0,
            EasingFunction::Linear,
            Some(Box::new(|| {})),
        );
        assert!(s.take_callback().is_some());
        assert!(s.take_callback().is_none());
    }
}
