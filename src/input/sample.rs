use glam::Vec2;

/// Raw pointer and touch state for one frame.
///
/// Produced by the host (see [`InputFrame`](super::InputFrame)) and consumed
/// by [`ZoomInputNormalizer`](super::ZoomInputNormalizer).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointerSample {
    /// Whether the platform reports multi-touch support.
    pub touch_supported: bool,
    /// Whether a pointer device (mouse, trackpad) is present.
    pub pointer_present: bool,
    /// Vertical wheel scroll accumulated this frame. Positive scrolls away
    /// from the user.
    pub wheel_delta: f32,
    /// Positions of the currently active touch points, in a stable order.
    pub touches: Vec<Vec2>,
}

impl PointerSample {
    /// A sample with no devices and no activity.
    #[must_use]
    pub fn idle() -> Self {
        Self::default()
    }

    /// A pointer-only sample carrying a wheel delta.
    #[must_use]
    pub fn wheel(delta: f32) -> Self {
        Self {
            pointer_present: true,
            wheel_delta: delta,
            ..Self::default()
        }
    }

    /// A touch-only sample with the given active touch points.
    #[must_use]
    pub fn touches(points: &[Vec2]) -> Self {
        Self {
            touch_supported: true,
            touches: points.to_vec(),
            ..Self::default()
        }
    }

    /// The active touch pair, if exactly two touches are down.
    #[must_use]
    pub fn touch_pair(&self) -> Option<[Vec2; 2]> {
        match self.touches.as_slice() {
            [a, b] => Some([*a, *b]),
            _ => None,
        }
    }
}
