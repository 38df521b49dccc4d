//! Zoom-dependent backdrop scale.
//!
//! Pure presentation glue: the scale is derived from the orthographic size
//! every frame and carries no state of its own.

use crate::options::BackdropOptions;

/// Computes the backdrop's pixels-per-unit multiplier from the zoom size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Backdrop {
    base_multiplier: f32,
    size_multiplier: f32,
}

impl Backdrop {
    /// Build from options.
    #[must_use]
    pub fn new(options: &BackdropOptions) -> Self {
        Self {
            base_multiplier: options.base_multiplier,
            size_multiplier: options.size_multiplier,
        }
    }

    /// `base_multiplier + size × size_multiplier`.
    #[must_use]
    pub fn scale(&self, size: f32) -> f32 {
        self.base_multiplier + size * self.size_multiplier
    }
}

impl Default for Backdrop {
    fn default() -> Self {
        Self::new(&BackdropOptions::default())
    }
}
