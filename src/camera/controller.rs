use std::rc::{Rc, Weak};

use glam::{Vec2, Vec3};

use super::follow::FollowTarget;
use super::state::CameraState;
use super::sweep::{Sweep, SweepCallback, SweepStep};
use super::zoom::{ZoomLimits, ZoomPolicy};
use crate::input::{PointerSample, ZoomInputNormalizer};
use crate::options::CameraOptions;
use crate::util::easing::EasingFunction;

/// Per-frame orthographic 2D camera controller.
///
/// Each frame either advances an active sweep or, when idle, applies zoom
/// input and follow positioning. A sweep fully suspends zoom and follow
/// until it reaches its target.
pub struct CameraController {
    state: CameraState,
    zoom: ZoomInputNormalizer,

    follow_target: Option<Weak<dyn FollowTarget>>,
    following: bool,
    follow_offset: Vec2,

    zoom_policy: ZoomPolicy,
    zoom_limits: ZoomLimits,
    wheel_snap: f32,
    pinch_sensitivity: f32,

    sweep: Option<Sweep>,
    sweep_easing: EasingFunction,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(CameraState::default(), &CameraOptions::default())
    }
}

impl CameraController {
    /// Create a controller at `state` configured from `options`.
    #[must_use]
    pub fn new(state: CameraState, options: &CameraOptions) -> Self {
        let mut controller = Self {
            state,
            zoom: ZoomInputNormalizer::new(),
            follow_target: None,
            following: false,
            follow_offset: Vec2::ZERO,
            zoom_policy: ZoomPolicy::default(),
            zoom_limits: ZoomLimits::default(),
            wheel_snap: 0.0,
            pinch_sensitivity: 0.0,
            sweep: None,
            sweep_easing: EasingFunction::DEFAULT,
        };
        controller.apply_options(options);
        controller
    }

    /// Replace zoom, input and follow-offset settings.
    ///
    /// The current size is left as is; it is brought into the new limits the
    /// next time zoom applies.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.zoom_policy = options.zoom_policy;
        self.zoom_limits = ZoomLimits::new(options.min_zoom, options.max_zoom);
        self.wheel_snap = options.wheel_snap;
        self.pinch_sensitivity = options.pinch_sensitivity;
        self.follow_offset =
            Vec2::new(options.follow_offset_x, options.follow_offset_y);
        log::debug!(
            "camera options applied: policy={:?} limits=[{}, {}]",
            self.zoom_policy,
            self.zoom_limits.min(),
            self.zoom_limits.max()
        );
    }

    // ── Queries ──────────────────────────────────────────────────────────

    /// Snapshot of the current pose.
    #[must_use]
    pub fn current_state(&self) -> CameraState {
        self.state
    }

    /// Whether a sweep is in progress.
    #[must_use]
    pub fn is_sweeping(&self) -> bool {
        self.sweep.is_some()
    }

    /// Whether the follow flag is set.
    #[must_use]
    pub fn is_following(&self) -> bool {
        self.following
    }

    /// Active zoom policy.
    #[must_use]
    pub fn zoom_policy(&self) -> ZoomPolicy {
        self.zoom_policy
    }

    /// Active zoom limits.
    #[must_use]
    pub fn zoom_limits(&self) -> ZoomLimits {
        self.zoom_limits
    }

    /// Current follow offset.
    #[must_use]
    pub fn follow_offset(&self) -> Vec2 {
        self.follow_offset
    }

    /// Position of the follow target, if one is set and still alive.
    #[must_use]
    pub fn follow_target_position(&self) -> Option<Vec2> {
        self.follow_target
            .as_ref()
            .and_then(Weak::upgrade)
            .map(|target| target.follow_position())
    }

    /// Camera position that frames the follow target at zoom `size`.
    ///
    /// Returns `(tx + 2·size·ox, ty + 2·size·oy, z)` with a live target and
    /// `(0, 0, z)` without one. `z` is always the camera's own depth.
    #[must_use]
    pub fn follow_target_position_for_size(&self, size: f32) -> Vec3 {
        let z = self.state.position.z;
        match self.follow_target_position() {
            Some(target) => {
                let offset = self.follow_offset * (size * 2.0);
                (target + offset).extend(z)
            }
            None => Vec3::new(0.0, 0.0, z),
        }
    }

    // ── Configuration ────────────────────────────────────────────────────

    /// Set the target to follow. Only a weak handle is kept.
    pub fn set_follow_target<T: FollowTarget + 'static>(
        &mut self,
        target: &Rc<T>,
    ) {
        let target: Rc<dyn FollowTarget> = target.clone();
        self.follow_target = Some(Rc::downgrade(&target));
    }

    /// Forget the follow target.
    pub fn clear_follow_target(&mut self) {
        self.follow_target = None;
    }

    /// Set the follow flag. Following needs both the flag and a live target.
    pub fn set_following(&mut self, following: bool) {
        self.following = following;
    }

    /// Set the follow offset, in multiples of the visible height.
    pub fn set_follow_offset(&mut self, offset: Vec2) {
        self.follow_offset = offset;
    }

    /// Set when zoom input is honored.
    pub fn set_zoom_policy(&mut self, policy: ZoomPolicy) {
        self.zoom_policy = policy;
    }

    /// Set the zoom limits. Bounds may be given in either order.
    pub fn set_zoom_limits(&mut self, min: f32, max: f32) {
        self.zoom_limits = ZoomLimits::new(min, max);
    }

    /// Set the easing curve used by subsequent sweeps.
    pub fn set_sweep_easing(&mut self, easing: EasingFunction) {
        self.sweep_easing = easing;
    }

    /// Jump to `state` immediately, cancelling any sweep without invoking
    /// its callback.
    pub fn set_state(&mut self, state: CameraState) {
        self.cancel_sweep();
        self.state = state;
    }

    // ── Sweeps ───────────────────────────────────────────────────────────

    /// Start sweeping from the current pose to `target` over `duration`
    /// seconds.
    ///
    /// Replaces any unfinished sweep; its callback is dropped without being
    /// called. A non-positive duration completes on the next
    /// [`advance`](Self::advance).
    pub fn begin_sweep(
        &mut self,
        target: CameraState,
        duration: f32,
        on_finish: Option<SweepCallback>,
    ) {
        self.cancel_sweep();
        log::debug!("sweep started: {target:?} over {duration}s");
        self.sweep = Some(Sweep::new(
            self.current_state(),
            target,
            duration,
            self.sweep_easing,
            on_finish,
        ));
    }

    /// Stop the active sweep where it is, without invoking its callback.
    pub fn cancel_sweep(&mut self) {
        if let Some(sweep) = self.sweep.take() {
            log::debug!(
                "sweep superseded at {:.0}%",
                sweep.progress() * 100.0
            );
        }
    }

    // ── Frame update ─────────────────────────────────────────────────────

    /// Advance one frame by `dt` seconds using this frame's pointer sample.
    pub fn advance(&mut self, dt: f32, input: &PointerSample) {
        if self.sweep.is_some() {
            self.update_sweep(dt);
        } else {
            self.update_zoom(input);
            self.update_follow();
        }
    }

    fn update_sweep(&mut self, dt: f32) {
        let Some(sweep) = self.sweep.as_mut() else {
            return;
        };
        match sweep.step(dt) {
            SweepStep::InProgress(pose) => self.state = pose,
            SweepStep::Finished(pose) => {
                self.state = pose;
                let callback = sweep.take_callback();
                self.sweep = None;
                log::debug!("sweep finished at {pose:?}");
                if let Some(callback) = callback {
                    callback();
                }
            }
        }
    }

    /// Following needs the flag and a target that is still alive.
    fn tracking_target(&self) -> bool {
        self.following && self.follow_target_position().is_some()
    }

    fn update_zoom(&mut self, input: &PointerSample) {
        if !self.zoom_policy.permits(self.tracking_target()) {
            return;
        }
        let delta =
            self.zoom
                .sample(self.wheel_snap, self.pinch_sensitivity, input);
        self.state.size = self.zoom_limits.clamp(self.state.size + delta);
    }

    fn update_follow(&mut self) {
        if self.tracking_target() {
            self.state.position =
                self.follow_target_position_for_size(self.state.size);
        }
    }
}

impl std::fmt::Debug for CameraController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraController")
            .field("state", &self.state)
            .field("following", &self.following)
            .field("has_target", &self.follow_target_position().is_some())
            .field("zoom_policy", &self.zoom_policy)
            .field("zoom_limits", &self.zoom_limits)
            .field("sweep", &self.sweep)
            .finish_non_exhaustive()
    }
}
