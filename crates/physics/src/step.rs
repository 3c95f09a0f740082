//! Fixed-timestep stepping discipline.
//!
//! The display frame rate is whatever the host gives us; the integrator
//! only ever advances in fixed sub-steps. Frame time is clamped, pushed
//! into an accumulator, and consumed in at most [`MAX_SUBSTEPS`] sub-steps
//! so a slow frame can never inject one giant unstable step.

use engine_core::MAX_FRAME_DELTA;

use crate::world::PhysicsWorld;

/// Size of one physics sub-step, in seconds.
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
/// Upper bound on sub-steps per rendered frame.
pub const MAX_SUBSTEPS: u32 = 5;

/// How many sub-steps a given amount of accumulated time wants, bounded by
/// the per-frame cap.
pub fn substeps_for(accumulated: f32) -> u32 {
    ((accumulated / FIXED_TIMESTEP).ceil().max(0.0) as u32).min(MAX_SUBSTEPS)
}

/// Owns the accumulator that decouples render frame rate from the physics
/// update rate.
#[derive(Debug, Default)]
pub struct StepLoop {
    accumulator: f32,
}

impl StepLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the world by one frame's worth of wall-clock time. Returns
    /// the number of sub-steps executed.
    ///
    /// The caller must have applied this frame's forces already; forces are
    /// applied once per frame, never between sub-steps.
    pub fn advance(&mut self, world: &mut PhysicsWorld, frame_dt: f32) -> u32 {
        // Guard against hosts that hand us garbage deltas.
        let dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, MAX_FRAME_DELTA)
        } else {
            0.0
        };
        self.accumulator += dt;

        let mut steps = 0;
        while self.accumulator >= FIXED_TIMESTEP && steps < MAX_SUBSTEPS {
            world.step_once();
            self.accumulator -= FIXED_TIMESTEP;
            steps += 1;
        }

        // If the cap was hit, drop the backlog beyond one sub-step: better
        // to lose simulated time than to death-spiral trying to catch up.
        if self.accumulator > FIXED_TIMESTEP {
            log::debug!(
                "physics backlog {:.3}s dropped after {} substeps",
                self.accumulator - FIXED_TIMESTEP,
                steps
            );
            self.accumulator = FIXED_TIMESTEP;
        }
        steps
    }

    /// Time currently waiting in the accumulator (for interpolation or
    /// diagnostics).
    pub fn pending(&self) -> f32 {
        self.accumulator
    }

    /// Drop any accumulated time (simulation reset).
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A 0.2 s frame is clamped to 0.05 s and covered in about 3 sub-steps
    /// (float rounding may leave the last one pending) — never an attempt
    /// to cover the whole unclamped delta.
    #[test]
    fn long_frame_is_clamped() {
        let mut world = PhysicsWorld::new();
        let mut loop_ = StepLoop::new();
        let steps = loop_.advance(&mut world, 0.2);
        assert!((2..=3).contains(&steps), "steps {}", steps);
        assert!(steps <= MAX_SUBSTEPS);
        assert!(loop_.pending() <= FIXED_TIMESTEP);
    }

    /// Sub-steps per frame never exceed the cap, whatever the input.
    #[test]
    fn substep_cap_holds() {
        assert_eq!(substeps_for(10.0), MAX_SUBSTEPS);
        assert_eq!(substeps_for(0.0), 0);
        assert_eq!(substeps_for(FIXED_TIMESTEP), 1);
        assert_eq!(substeps_for(FIXED_TIMESTEP * 2.5), 3);
    }

    /// A 60 Hz frame executes exactly one sub-step with no drift: the
    /// accumulator remainder stays tiny across many frames.
    #[test]
    fn sixty_hz_steps_once_per_frame() {
        let mut world = PhysicsWorld::new();
        let mut loop_ = StepLoop::new();
        let mut total = 0;
        for _ in 0..60 {
            total += loop_.advance(&mut world, 1.0 / 60.0);
        }
        assert_eq!(total, 60);
        assert!(loop_.pending() < FIXED_TIMESTEP);
    }

    /// Frames shorter than a sub-step accumulate until a step is due
    /// (144 Hz display, 60 Hz physics).
    #[test]
    fn short_frames_accumulate() {
        let mut world = PhysicsWorld::new();
        let mut loop_ = StepLoop::new();
        let mut total = 0;
        for _ in 0..144 {
            total += loop_.advance(&mut world, 1.0 / 144.0);
        }
        // One second of wall time = 60 sub-steps, give or take rounding.
        assert!((59..=61).contains(&total), "total {}", total);
    }

    /// Non-finite deltas are treated as zero time.
    #[test]
    fn garbage_delta_is_ignored() {
        let mut world = PhysicsWorld::new();
        let mut loop_ = StepLoop::new();
        assert_eq!(loop_.advance(&mut world, f32::NAN), 0);
        assert_eq!(loop_.advance(&mut world, -1.0), 0);
        assert_eq!(loop_.pending(), 0.0);
    }
}
