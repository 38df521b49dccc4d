//! Input handling: event types, per-frame sampling, and the normalizer that
//! converts raw wheel and pinch samples into a zoom delta.

/// Platform-agnostic input events.
pub mod event;
/// Per-frame event accumulation.
pub mod frame;
/// Raw per-frame device sample.
pub mod sample;
/// Wheel/pinch to zoom-delta conversion.
pub mod zoom;

pub use event::{InputEvent, TouchPhase};
pub use frame::InputFrame;
pub use sample::PointerSample;
pub use zoom::ZoomInputNormalizer;
