//! Third-person chase camera.
//!
//! The camera trails a point behind and above the craft and eases toward it
//! with an exponential decay parameterized by elapsed time, so the feel is
//! identical at 30, 60, or 144 Hz. The decay rate of 5 s⁻¹ matches the
//! classic 0.08-per-frame lerp at 60 Hz.

use engine_core::Transform;
use glam::{Mat4, Vec3};

/// Camera position offset in the craft's local frame: behind and above.
pub const FOLLOW_OFFSET: Vec3 = Vec3::new(0.0, 5.0, -15.0);
/// Look-at offset in the craft's local frame: just ahead of the nose.
pub const LOOK_OFFSET: Vec3 = Vec3::new(0.0, 1.0, 5.0);
/// Exponential smoothing rate, 1/s.
pub const SMOOTHING_RATE: f32 = 5.0;

/// Camera pose handed to the render collaborator each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl CameraPose {
    /// View matrix for this pose (right-handed, +Y up).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.look_at, Vec3::Y)
    }
}

/// Smoothed third-person tracking of the craft's pose.
#[derive(Debug, Clone, Copy)]
pub struct ChaseCamera {
    position: Vec3,
    look_at: Vec3,
}

impl ChaseCamera {
    /// Create a camera already sitting at its target pose for the given
    /// craft transform (no easing-in from the origin on the first frame).
    pub fn snapped_to(craft: &Transform) -> Self {
        Self {
            position: Self::target_position(craft),
            look_at: Self::target_look_at(craft),
        }
    }

    fn target_position(craft: &Transform) -> Vec3 {
        craft.position + craft.rotation * FOLLOW_OFFSET
    }

    fn target_look_at(craft: &Transform) -> Vec3 {
        craft.position + craft.rotation * LOOK_OFFSET
    }

    /// Ease toward the craft's current pose. The interpolation fraction is
    /// `1 - exp(-rate·dt)`: the same wall-clock chase feel whatever the
    /// frame rate.
    pub fn update(&mut self, craft: &Transform, dt: f32) {
        let alpha = 1.0 - (-SMOOTHING_RATE * dt).exp();
        self.position = self.position.lerp(Self::target_position(craft), alpha);
        // The look target tracks without smoothing; lagging it makes the
        // nose swim during rolls.
        self.look_at = Self::target_look_at(craft);
    }

    /// Jump straight to the target pose (simulation reset).
    pub fn snap_to(&mut self, craft: &Transform) {
        *self = Self::snapped_to(craft);
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position,
            look_at: self.look_at,
        }
    }
}
