//! Frame time management for the simulation loop.

use std::time::{Duration, Instant};

/// Longest frame delta the simulation will accept, in seconds. A stalled
/// host (backgrounded tab, debugger pause) otherwise hands the physics a
/// giant destabilizing step on resume.
pub const MAX_FRAME_DELTA: f32 = 1.0 / 20.0;

/// Manages frame timing and delta time calculation.
#[derive(Debug)]
pub struct Time {
    /// Time when the simulation started.
    start_time: Instant,
    /// Time of the last frame.
    last_frame: Instant,
    /// Duration of the last frame, clamped to [`MAX_FRAME_DELTA`].
    delta: Duration,
    /// Unclamped duration of the last frame (for diagnostics).
    raw_delta: Duration,
    /// Total elapsed time since start.
    elapsed: Duration,
    /// Frame count since start.
    frame_count: u64,
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

impl Time {
    /// Create a new time manager.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_frame: now,
            delta: Duration::ZERO,
            raw_delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Update timing at the start of a new frame.
    pub fn update(&mut self) {
        let now = Instant::now();
        self.raw_delta = now - self.last_frame;
        self.delta = self.raw_delta.min(Duration::from_secs_f32(MAX_FRAME_DELTA));
        if self.raw_delta != self.delta {
            log::debug!(
                "frame delta {:.3}s clamped to {:.3}s",
                self.raw_delta.as_secs_f32(),
                MAX_FRAME_DELTA
            );
        }
        self.last_frame = now;
        self.elapsed = now - self.start_time;
        self.frame_count += 1;
    }

    /// Get the clamped delta time in seconds.
    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Get the unclamped delta time in seconds.
    pub fn raw_delta_seconds(&self) -> f32 {
        self.raw_delta.as_secs_f32()
    }

    /// Get total elapsed time in seconds.
    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }

    /// Get the current frame count.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the current FPS (from the last frame only).
    pub fn fps(&self) -> f32 {
        if self.raw_delta.as_secs_f32() > 0.0 {
            1.0 / self.raw_delta.as_secs_f32()
        } else {
            0.0
        }
    }
}
