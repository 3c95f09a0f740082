//! Physics backend for skylane, wrapping Rapier3D.
//!
//! The simulation core treats this crate as a black box: create bodies,
//! apply a force and a torque once per frame, step with a fixed sub-step,
//! read the pose back, drain collision impacts. Everything Rapier-specific
//! stays behind this boundary.

pub mod collision;
pub mod step;
pub mod world;

pub use collision::*;
pub use step::*;
pub use world::*;

// Re-export Rapier handles for downstream crates
pub use rapier3d::prelude::{ColliderHandle, RigidBodyHandle};
