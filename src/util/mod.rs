//! Shared utilities for the camera controller and its host glue.
//!
//! Helpers for frame timing and easing curves.

pub mod easing;
pub mod frame_timing;
