//! Frame delta-time source for hosts driving the controller.

use web_time::{Duration, Instant};

/// Longest step handed to the controller in one frame, so a stalled window
/// does not finish a sweep in a single jump.
const DEFAULT_MAX_STEP: Duration = Duration::from_millis(100);

/// Per-frame delta-time source with a smoothed FPS readout.
pub struct FrameTiming {
    /// Last frame timestamp
    last_frame: Instant,
    /// Upper bound for a single reported step
    max_step: Duration,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTiming {
    /// Create a frame timer starting now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            max_step: DEFAULT_MAX_STEP,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Override the longest step [`tick`](Self::tick) may report.
    #[must_use]
    pub fn with_max_step(mut self, max_step: Duration) -> Self {
        self.max_step = max_step;
        self
    }

    /// Mark the start of a frame and return the seconds elapsed since the
    /// previous one, capped at the configured maximum step.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.record(elapsed)
    }

    fn record(&mut self, elapsed: Duration) -> f32 {
        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        elapsed.min(self.max_step).as_secs_f32()
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
