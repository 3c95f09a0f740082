//! Core types shared across the skylane simulation crates:
//! - Transform (pose) with the craft axis convention
//! - Frame time management with the large-delta clamp
//! - Aviation unit conversions

pub mod time;
pub mod transform;
pub mod units;

pub use time::*;
pub use transform::*;
pub use units::*;

// Re-export commonly used math types
pub use glam::{Mat4, Quat, Vec3};
