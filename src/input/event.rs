/// Platform-agnostic input events.
///
/// These are fed into an [`InputFrame`](super::InputFrame), which folds a
/// frame's worth of events into a [`PointerSample`](super::PointerSample).
///
/// # Example
///
/// ```
/// # use orthocam::input::{InputEvent, InputFrame};
/// let mut frame = InputFrame::new(true);
/// frame.handle_event(InputEvent::Scroll { delta: 1.0 });
/// let sample = frame.end_frame();
/// assert_eq!(sample.wheel_delta, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Vertical scroll wheel (positive = away from the user).
    Scroll {
        /// Scroll amount in lines.
        delta: f32,
    },
    /// Touch point changed.
    Touch {
        /// Platform identifier of the finger, stable for the gesture.
        id: u64,
        /// What happened to the touch point.
        phase: TouchPhase,
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
}

/// Lifecycle phase of a single touch point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// Finger touched down.
    Started,
    /// Finger moved.
    Moved,
    /// Finger lifted.
    Ended,
    /// The system cancelled the touch.
    Cancelled,
}

#[cfg(feature = "viewer")]
impl From<winit::event::TouchPhase> for TouchPhase {
    fn from(phase: winit::event::TouchPhase) -> Self {
        match phase {
            winit::event::TouchPhase::Started => Self::Started,
            winit::event::TouchPhase::Moved => Self::Moved,
            winit::event::TouchPhase::Ended => Self::Ended,
            winit::event::TouchPhase::Cancelled => Self::Cancelled,
        }
    }
}
