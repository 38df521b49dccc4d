use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Snapshot of an orthographic camera pose.
///
/// Equality is exact field-wise comparison; no epsilon is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    /// World-space camera position. `z` is the camera depth.
    pub position: Vec3,
    /// Orthographic size: half of the visible vertical extent.
    pub size: f32,
    /// Camera orientation.
    pub rotation: Quat,
}

impl CameraState {
    /// Create a state with no rotation.
    #[must_use]
    pub fn new(position: Vec3, size: f32) -> Self {
        Self {
            position,
            size,
            rotation: Quat::IDENTITY,
        }
    }

    /// Builder-style rotation override.
    #[must_use]
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Interpolate each field independently towards `target` by weight `t`.
    ///
    /// Position and size are linear; rotation uses normalized lerp along the
    /// shortest arc. The caller supplies an already-eased `t`.
    #[must_use]
    pub fn interpolate(&self, target: &CameraState, t: f32) -> Self {
        Self {
            position: self.position + (target.position - self.position) * t,
            size: self.size + (target.size - self.size) * t,
            rotation: self.rotation.lerp(target.rotation, t),
        }
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, -10.0), 5.0)
    }
}
