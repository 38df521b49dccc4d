use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Sweep", inline)]
#[serde(default)]
/// Defaults for camera sweeps started without explicit parameters.
pub struct SweepOptions {
    /// Sweep duration in seconds.
    #[schemars(title = "Duration", range(min = 0.0, max = 10.0), extend("step" = 0.05))]
    pub duration: f32,
    /// Interpolation curve.
    #[schemars(title = "Easing")]
    pub easing: EasingFunction,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            duration: 1.0,
            easing: EasingFunction::SmoothStep,
        }
    }
}
