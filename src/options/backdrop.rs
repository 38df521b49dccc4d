use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Backdrop", inline)]
#[serde(default)]
/// Scale parameters for the zoom-dependent backdrop.
///
/// The backdrop scale is `base_multiplier + size × size_multiplier`.
pub struct BackdropOptions {
    /// Offset of the backdrop scale range.
    #[schemars(title = "Base Multiplier", range(min = 0.0, max = 10.0), extend("step" = 0.05))]
    pub base_multiplier: f32,
    /// How strongly zooming affects the backdrop scale.
    #[schemars(title = "Size Multiplier", range(min = 0.0, max = 2.0), extend("step" = 0.01))]
    pub size_multiplier: f32,
}

impl Default for BackdropOptions {
    fn default() -> Self {
        Self {
            base_multiplier: 1.0,
            size_multiplier: 0.1,
        }
    }
}
