//! Camera system for 2D orthographic viewing.
//!
//! Provides a per-frame controller with timed sweeps between poses,
//! policy-gated zoom, target following, and orthographic projection helpers.

/// Per-frame controller: sweep, zoom and follow state machine.
pub mod controller;
/// Orthographic projection and GPU uniform types.
pub mod core;
/// Follow-target handles.
pub mod follow;
/// Camera pose snapshots.
pub mod state;
/// Timed pose interpolation.
pub mod sweep;
/// Zoom policy and limits.
pub mod zoom;

pub use controller::CameraController;
pub use follow::{FollowTarget, TrackedPoint};
pub use state::CameraState;
pub use sweep::SweepCallback;
pub use zoom::{ZoomLimits, ZoomPolicy};
