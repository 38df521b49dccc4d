// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests assert through unwrap/panic
#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::panic, clippy::float_cmp)
)]

//! Per-frame controller for a 2D orthographic camera.
//!
//! Each frame the host calls
//! [`CameraController::advance`](camera::CameraController::advance) once
//! with the frame's delta time and a [`PointerSample`](input::PointerSample).
//! The controller then either:
//!
//! - interpolates towards the target of an active sweep
//!   ([`begin_sweep`](camera::CameraController::begin_sweep)), or
//! - applies zoom input within configured limits and repositions the camera
//!   on its follow target.
//!
//! # Key entry points
//!
//! - [`camera::CameraController`] - sweep / zoom / follow state machine
//! - [`input::ZoomInputNormalizer`] - wheel and pinch to zoom delta
//! - [`input::InputFrame`] - folds platform events into a per-frame sample
//! - [`options::Options`] - TOML-backed configuration
//! - [`camera::core::OrthoProjection`] - view-projection matrices and GPU
//!   uniform
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//!
//! use glam::{Vec2, Vec3};
//! use orthocam::camera::{CameraController, CameraState, TrackedPoint};
//! use orthocam::input::PointerSample;
//! use orthocam::options::CameraOptions;
//!
//! let mut camera = CameraController::new(
//!     CameraState::new(Vec3::new(0.0, 0.0, -10.0), 5.0),
//!     &CameraOptions::default(),
//! );
//! let player = Rc::new(TrackedPoint::new(Vec2::new(3.0, 4.0)));
//! camera.set_follow_target(&player);
//! camera.set_following(true);
//!
//! camera.advance(1.0 / 60.0, &PointerSample::wheel(1.0));
//! let state = camera.current_state();
//! assert_eq!(state.position, Vec3::new(3.0, 4.0, -10.0));
//! assert_eq!(state.size, 4.5);
//! ```

pub mod backdrop;
pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;
