//! Collision groups, filtering, and the per-tick impact queue.

use rapier3d::prelude::*;

/// Impact speed along the contact normal above which a collision counts as
/// hard (crash sound, reset prompt) rather than a runway touch.
pub const HARD_IMPACT_SPEED: f32 = 2.0;

/// Collision groups for the different collider kinds.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionGroup {
    /// Static environment (ground, buildings, streetlights).
    Environment = 1 << 0,
    /// The player craft.
    Craft = 1 << 1,
}

impl CollisionGroup {
    /// Membership/filter pair for environment colliders.
    pub fn environment() -> (Group, Group) {
        let membership = Group::from_bits_retain(Self::Environment as u32);
        let filter = Group::ALL;
        (membership, filter)
    }

    /// Membership/filter pair for the craft. Collides with the environment
    /// only; there is exactly one craft.
    pub fn craft() -> (Group, Group) {
        let membership = Group::from_bits_retain(Self::Craft as u32);
        let filter = Group::from_bits_retain(Self::Environment as u32);
        (membership, filter)
    }
}

/// One collision registered during stepping, drained after the tick.
#[derive(Debug, Clone, Copy)]
pub struct Impact {
    /// First collider of the contact pair.
    pub first: ColliderHandle,
    /// Second collider of the contact pair.
    pub second: ColliderHandle,
    /// Speed along the contact normal at impact, m/s.
    pub impact_speed: f32,
}

impl Impact {
    /// Whether this impact is hard enough to matter to gameplay.
    pub fn is_hard(&self) -> bool {
        self.impact_speed > HARD_IMPACT_SPEED
    }

    /// Whether the given collider took part in this impact.
    pub fn involves(&self, collider: ColliderHandle) -> bool {
        self.first == collider || self.second == collider
    }
}
