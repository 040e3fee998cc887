//! Wall-clock frame timing for hosts without their own frame clock.

use web_time::Instant;

/// Maximum frame delta fed to the rig, in seconds. A long stall (tab in the
/// background, debugger pause) otherwise produces one huge step that slams
/// every damped value onto its target.
pub const MAX_FRAME_DT: f32 = 0.1;

/// Wall-clock frame timing with smoothed FPS readout.
pub struct FrameClock {
    start: Instant,
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Start the clock now.
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Call once per frame. Returns the clamped frame delta in seconds.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        frame_time.min(MAX_FRAME_DT)
    }

    /// Seconds since the clock started.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
