use glam::{Mat4, Vec2, Vec3};

use super::state::CameraState;

/// Orthographic projection parameters that do not change with the pose.
///
/// Uses the left-handed convention: the camera looks along +Z, so a camera
/// at `z = -10` sees content on the `z = 0` plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthoProjection {
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for OrthoProjection {
    fn default() -> Self {
        Self {
            aspect: 16.0 / 9.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Orthographic size (half visible height).
    pub size: f32,
    /// Half extents of the visible area in world units.
    pub half_extents: [f32; 2],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl OrthoProjection {
    /// Update the aspect ratio from a viewport size in pixels.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    /// Half width and half height of the visible area at `size`.
    #[must_use]
    pub fn half_extents(&self, size: f32) -> Vec2 {
        Vec2::new(size * self.aspect, size)
    }

    /// World-to-camera transform for `state`.
    #[must_use]
    pub fn build_view(&self, state: &CameraState) -> Mat4 {
        Mat4::from_rotation_translation(state.rotation, state.position)
            .inverse()
    }

    /// Orthographic projection matrix for `state`'s size.
    #[must_use]
    pub fn build_projection(&self, state: &CameraState) -> Mat4 {
        let half = self.half_extents(state.size);
        Mat4::orthographic_lh(
            -half.x, half.x, -half.y, half.y, self.znear, self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self, state: &CameraState) -> Mat4 {
        self.build_projection(state) * self.build_view(state)
    }

    /// Map a screen position in pixels (origin top-left) to the world point
    /// on the camera's focal plane.
    #[must_use]
    pub fn screen_to_world(
        &self,
        state: &CameraState,
        screen: Vec2,
        viewport: Vec2,
    ) -> Vec3 {
        let viewport = viewport.max(Vec2::ONE);
        let ndc = Vec2::new(
            2.0 * screen.x / viewport.x - 1.0,
            1.0 - 2.0 * screen.y / viewport.y,
        );
        let local = ndc * self.half_extents(state.size);
        state.position + state.rotation * local.extend(0.0)
    }

    /// Fill a GPU uniform from `state`.
    #[must_use]
    pub fn uniform(&self, state: &CameraState) -> CameraUniform {
        CameraUniform {
            view_proj: self.build_matrix(state).to_cols_array_2d(),
            position: state.position.to_array(),
            size: state.size,
            half_extents: self.half_extents(state.size).to_array(),
            aspect: self.aspect,
            _pad: 0.0,
        }
    }
}
