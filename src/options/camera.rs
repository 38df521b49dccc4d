use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::ZoomPolicy;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Zoom limits, input sensitivities and follow offsets.
pub struct CameraOptions {
    /// When player zoom input is honored.
    #[schemars(title = "Allow Zoom")]
    pub zoom_policy: ZoomPolicy,
    /// Smallest orthographic size reachable by zoom input.
    #[schemars(title = "Minimum Zoom", range(min = 0.1, max = 100.0), extend("step" = 0.1))]
    pub min_zoom: f32,
    /// Largest orthographic size reachable by zoom input.
    #[schemars(title = "Maximum Zoom", range(min = 0.1, max = 100.0), extend("step" = 0.1))]
    pub max_zoom: f32,
    /// Size change per mouse-wheel notch.
    #[schemars(title = "Wheel Snap", range(min = 0.0, max = 5.0), extend("step" = 0.05))]
    pub wheel_snap: f32,
    /// Size change per pixel of pinch distance change.
    #[schemars(title = "Pinch Sensitivity", range(min = 0.0, max = 0.1), extend("step" = 0.001))]
    pub pinch_sensitivity: f32,
    /// Horizontal follow offset, in multiples of the visible height.
    #[schemars(title = "Follow Offset X", range(min = -1.0, max = 1.0), extend("step" = 0.01))]
    pub follow_offset_x: f32,
    /// Vertical follow offset, in multiples of the visible height.
    #[schemars(title = "Follow Offset Y", range(min = -1.0, max = 1.0), extend("step" = 0.01))]
    pub follow_offset_y: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            zoom_policy: ZoomPolicy::Always,
            min_zoom: 2.0,
            max_zoom: 20.0,
            wheel_snap: 0.5,
            pinch_sensitivity: 0.01,
            follow_offset_x: 0.0,
            follow_offset_y: 0.0,
        }
    }
}
