//! Per-craft flight parameters. Immutable once the craft is spawned;
//! loadable from the game config file.

use serde::{Deserialize, Serialize};

/// Fixed flight characteristics of a craft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightParameters {
    /// Maximum engine thrust in newtons at full throttle.
    #[serde(default = "default_max_thrust")]
    pub max_thrust_force: f32,
    /// Scales lift with the square of airspeed.
    #[serde(default = "default_lift")]
    pub lift_coefficient: f32,
    /// Scales drag with the square of airspeed.
    #[serde(default = "default_drag")]
    pub drag_coefficient: f32,
    /// Roll control authority.
    #[serde(default = "default_roll_sensitivity")]
    pub roll_sensitivity: f32,
    /// Yaw control authority.
    #[serde(default = "default_yaw_sensitivity")]
    pub yaw_sensitivity: f32,
    /// Airspeed in knots below which the craft stalls.
    #[serde(default = "default_min_stall_speed")]
    pub min_stall_speed_knots: f32,
}

fn default_max_thrust() -> f32 {
    300.0
}
fn default_lift() -> f32 {
    0.08
}
fn default_drag() -> f32 {
    0.001
}
fn default_roll_sensitivity() -> f32 {
    0.1
}
fn default_yaw_sensitivity() -> f32 {
    0.05
}
fn default_min_stall_speed() -> f32 {
    30.0
}

impl Default for FlightParameters {
    fn default() -> Self {
        Self {
            max_thrust_force: default_max_thrust(),
            lift_coefficient: default_lift(),
            drag_coefficient: default_drag(),
            roll_sensitivity: default_roll_sensitivity(),
            yaw_sensitivity: default_yaw_sensitivity(),
            min_stall_speed_knots: default_min_stall_speed(),
        }
    }
}
