//! Transform component for spatial positioning.
//!
//! Axis convention: the craft's nose points along local +Z, the canopy along
//! local +Y. With those two fixed in a right-handed frame, local +X is the
//! port wingtip. All direction helpers rotate the canonical axes by the
//! current rotation.

use glam::{Mat4, Quat, Vec3};

/// A 3D transform representing position and rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Transform {
    /// Create a new transform at the given position.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a new transform with position and rotation.
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Get the forward direction (nose, local +Z).
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Get the up direction (canopy, local +Y).
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Get the right direction (starboard wingtip, local -X).
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::NEG_X
    }

    /// Compass heading in radians, measured from +Z toward +X with the
    /// forward vector flattened onto the ground plane. Zero when the nose
    /// points along world +Z.
    pub fn heading(&self) -> f32 {
        let f = self.forward();
        f.x.atan2(f.z)
    }

    /// Create the model matrix for this transform (for mesh sync by a
    /// render collaborator).
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }

    /// Translate the transform by a delta.
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Identity rotation must map the canonical axes straight through.
    #[test]
    fn identity_axes() {
        let t = Transform::default();
        assert_eq!(t.forward(), Vec3::Z);
        assert_eq!(t.up(), Vec3::Y);
        assert_eq!(t.right(), Vec3::NEG_X);
    }

    /// A 90° yaw to the left (positive rotation about +Y) swings the nose
    /// from +Z to +X.
    #[test]
    fn yaw_rotates_forward() {
        let t = Transform::from_position_rotation(
            Vec3::ZERO,
            Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
        );
        let f = t.forward();
        assert!((f - Vec3::X).length() < 1e-6, "forward was {:?}", f);
        assert!((t.heading() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    /// Heading is zero when the nose points along world +Z regardless of
    /// pitch or roll.
    #[test]
    fn heading_ignores_roll() {
        let t = Transform::from_position_rotation(
            Vec3::ZERO,
            Quat::from_rotation_z(0.7),
        );
        assert!(t.heading().abs() < 1e-6);
    }
}
