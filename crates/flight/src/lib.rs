//! Arcade flight model for skylane.
//!
//! Pure math: given the craft's kinematic state and the player's control
//! state, produce the force and torque to hand to the physics backend for
//! this tick, plus the derived readouts (speed, altitude, stall flag) the
//! HUD and camera consume. Nothing in this crate touches the backend or
//! mutates shared state.

pub mod controls;
pub mod dynamics;
pub mod params;
pub mod stall;

pub use controls::*;
pub use dynamics::*;
pub use params::*;
pub use stall::*;
