//! Aviation unit conversions used by the flight model and HUD.

/// One knot in meters per second.
pub const KNOTS_TO_MS: f32 = 0.514444;
/// Meters per second to knots.
pub const MS_TO_KNOTS: f32 = 1.0 / KNOTS_TO_MS;
/// One foot in meters.
pub const FEET_TO_METERS: f32 = 0.3048;
/// Meters to feet.
pub const METERS_TO_FEET: f32 = 1.0 / FEET_TO_METERS;

/// Convert a speed in m/s to knots.
pub fn ms_to_knots(ms: f32) -> f32 {
    ms * MS_TO_KNOTS
}

/// Convert an altitude in meters to feet.
pub fn meters_to_feet(m: f32) -> f32 {
    m * METERS_TO_FEET
}
