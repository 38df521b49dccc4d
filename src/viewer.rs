//! Standalone demo window backed by winit.
//!
//! Drives a [`CameraController`] from real wheel and touch input while a
//! demo target circles the origin. The window title shows the live pose,
//! mode and backdrop scale.
//!
//! Keys: `F` toggles following, `H` sweeps home, `P` sweeps to a rotated
//! close-up, `Escape` quits.
//!
//! ```no_run
//! # use orthocam::viewer::Viewer;
//! Viewer::builder()
//!     .with_title("orthocam")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::{rc::Rc, sync::Arc};

use glam::{Quat, Vec2, Vec3};
use web_time::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::{
    backdrop::Backdrop,
    camera::{CameraController, CameraState, TrackedPoint},
    error::OrthocamError,
    input::{InputEvent, InputFrame},
    options::Options,
    util::frame_timing::FrameTiming,
};

/// How often the title bar readout refreshes.
const TITLE_INTERVAL: Duration = Duration::from_millis(250);

/// Radius of the demo target's orbit in world units.
const ORBIT_RADIUS: f32 = 6.0;

/// Angular speed of the demo target in radians per second.
const ORBIT_SPEED: f32 = 0.6;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with default options and the title "orthocam".
    fn new() -> Self {
        Self {
            options: None,
            title: "orthocam".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title prefix.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that exercises the camera controller.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to enter
/// the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    pub fn run(self) -> Result<(), OrthocamError> {
        let event_loop = EventLoop::new()
            .map_err(|e| OrthocamError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp::new(self.options, self.title);
        event_loop
            .run_app(&mut app)
            .map_err(|e| OrthocamError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    title: String,
    controller: CameraController,
    backdrop: Backdrop,
    sweep_duration: f32,
    home: CameraState,
    target: Rc<TrackedPoint>,
    orbit_angle: f32,
    input: InputFrame,
    timing: FrameTiming,
    last_title_update: Instant,
}

impl ViewerApp {
    fn new(options: Options, title: String) -> Self {
        let home = CameraState::new(Vec3::new(0.0, 0.0, -10.0), 8.0);
        let mut controller = CameraController::new(home, &options.camera);
        controller.set_sweep_easing(options.sweep.easing);

        let target = Rc::new(TrackedPoint::new(Vec2::new(ORBIT_RADIUS, 0.0)));
        controller.set_follow_target(&target);

        Self {
            window: None,
            title,
            controller,
            backdrop: Backdrop::new(&options.backdrop),
            sweep_duration: options.sweep.duration,
            home,
            target,
            orbit_angle: 0.0,
            input: InputFrame::new(true),
            timing: FrameTiming::new(),
            last_title_update: Instant::now(),
        }
    }

    fn handle_key(&mut self, key: KeyCode, event_loop: &ActiveEventLoop) {
        match key {
            KeyCode::KeyF => {
                let following = !self.controller.is_following();
                self.controller.set_following(following);
                log::info!("following: {following}");
            }
            KeyCode::KeyH => {
                self.controller.begin_sweep(
                    self.home,
                    self.sweep_duration,
                    Some(Box::new(|| log::info!("arrived home"))),
                );
            }
            KeyCode::KeyP => {
                let close_up = CameraState::new(Vec3::new(0.0, 0.0, -10.0), 3.0)
                    .with_rotation(Quat::from_rotation_z(0.25));
                self.controller.begin_sweep(
                    close_up,
                    self.sweep_duration,
                    Some(Box::new(|| log::info!("arrived at close-up"))),
                );
            }
            KeyCode::Escape => event_loop.exit(),
            _ => {}
        }
    }

    fn frame(&mut self) {
        let dt = self.timing.tick();

        self.orbit_angle += dt * ORBIT_SPEED;
        self.target.set(Vec2::from_angle(self.orbit_angle) * ORBIT_RADIUS);

        let sample = self.input.end_frame();
        self.controller.advance(dt, &sample);

        let state = self.controller.current_state();
        let backdrop_scale = self.backdrop.scale(state.size);

        let now = Instant::now();
        if now.duration_since(self.last_title_update) >= TITLE_INTERVAL {
            self.last_title_update = now;
            if let Some(window) = &self.window {
                let mode = if self.controller.is_sweeping() {
                    "sweeping"
                } else if self.controller.is_following() {
                    "following"
                } else {
                    "idle"
                };
                window.set_title(&format!(
                    "{} | {mode} | pos ({:.2}, {:.2}) size {:.2} \
                     backdrop {:.2} | {:.0} fps",
                    self.title,
                    state.position.x,
                    state.position.y,
                    state.size,
                    backdrop_scale,
                    self.timing.fps(),
                ));
            }
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(960, 540));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::RedrawRequested => {
                self.frame();
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    if let PhysicalKey::Code(code) = event.physical_key {
                        self.handle_key(code, event_loop);
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.input.handle_event(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            WindowEvent::MouseWheel { delta, .. } => {
                #[allow(clippy::cast_possible_truncation)]
                let scroll_delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                self.input.handle_event(InputEvent::Scroll {
                    delta: scroll_delta,
                });
            }

            WindowEvent::Touch(touch) => {
                self.input.handle_event(InputEvent::Touch {
                    id: touch.id,
                    phase: touch.phase.into(),
                    x: touch.location.x as f32,
                    y: touch.location.y as f32,
                });
            }

            _ => {}
        }
    }
}
