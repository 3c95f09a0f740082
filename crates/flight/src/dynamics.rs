//! The flight dynamics model: control inputs to forces and torques.
//!
//! This is deliberately arcade physics, not an airfoil simulation. Lift and
//! drag are scalar quadratic models, and control authority scales with
//! airspeed but is floored so the craft always answers the stick. Gravity is
//! NOT applied here — the physics backend's global gravity covers it.

use engine_core::{ms_to_knots, meters_to_feet};
use glam::{Quat, Vec3};

use crate::params::FlightParameters;
use crate::stall::is_stalled;

/// Base scale for all control torques, in newton-meters per unit of
/// sensitivity-weighted input.
pub const TORQUE_FACTOR: f32 = 50.0;
/// Control effectiveness never drops below this fraction, even at rest, so
/// a parked or stalled craft still responds to input.
pub const SPEED_FACTOR_FLOOR: f32 = 0.5;
/// Airspeed in m/s at which control effectiveness reaches 1.0.
pub const FULL_AUTHORITY_SPEED: f32 = 10.0;
/// Fraction of lift that survives a stall.
pub const STALL_LIFT_MULTIPLIER: f32 = 0.15;
/// Nose-down pitch bias (pre-TORQUE_FACTOR) applied while stalled, as a
/// recovery aid.
pub const STALL_NOSE_DOWN_BIAS: f32 = 0.1;

/// Kinematic state of the craft, read back from the physics backend once
/// per tick. Velocities are world-space; the backend's integrator is the
/// only thing that mutates them.
#[derive(Debug, Clone, Copy)]
pub struct BodyState {
    /// World-space position in meters.
    pub position: Vec3,
    /// World-space orientation (unit quaternion).
    pub rotation: Quat,
    /// World-space linear velocity in m/s.
    pub linear_velocity: Vec3,
}

impl BodyState {
    /// A craft at rest, level, at the given position.
    pub fn at_rest(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            linear_velocity: Vec3::ZERO,
        }
    }
}

/// Output of the dynamics model for one tick.
#[derive(Debug, Clone, Copy)]
pub struct FlightForces {
    /// Net aerodynamic + thrust force in world space, to be applied at the
    /// center of mass.
    pub force: Vec3,
    /// Control torque in the craft's LOCAL frame. The caller must rotate it
    /// into world space before handing it to the backend.
    pub torque: Vec3,
}

/// Readouts recomputed every tick for the HUD, camera, and telemetry.
#[derive(Debug, Clone, Copy, Default)]
pub struct DerivedFlightState {
    /// |linear velocity| in m/s.
    pub speed_ms: f32,
    /// Airspeed in knots.
    pub speed_knots: f32,
    /// Altitude in feet (position.y converted; may be fractionally negative
    /// while settling on the ground — the HUD floors it).
    pub altitude_feet: f32,
    /// Whether the craft is stalled this tick.
    pub stalled: bool,
}

/// Compute the force and torque for this tick.
///
/// Pure function: reads `body` and `controls`, writes nothing. The stall
/// flag is recomputed from instantaneous state (no hysteresis).
pub fn compute_flight_forces(
    body: &BodyState,
    controls: &crate::ControlState,
    params: &FlightParameters,
) -> (FlightForces, DerivedFlightState) {
    let velocity = body.linear_velocity;
    let speed = velocity.length();
    let speed_knots = ms_to_knots(speed);

    let derived = DerivedFlightState {
        speed_ms: speed,
        speed_knots,
        altitude_feet: meters_to_feet(body.position.y),
        stalled: is_stalled(speed_knots, body.position.y, params.min_stall_speed_knots),
    };

    // Body axes in world space.
    let forward = body.rotation * Vec3::Z;
    let up = body.rotation * Vec3::Y;

    // Thrust along the nose, applied at the center of mass.
    let thrust = forward * (controls.throttle() * params.max_thrust_force);

    // Quadratic lift along the canopy, collapsed while stalled. Never
    // negative: lift cannot push the craft into the ground.
    let mut lift_magnitude = params.lift_coefficient * speed * speed;
    if derived.stalled {
        lift_magnitude *= STALL_LIFT_MULTIPLIER;
    }
    let lift = up * lift_magnitude.max(0.0);

    // Drag opposes the full velocity vector. velocity * speed makes the
    // magnitude quadratic in speed; at rest both factors are zero, so the
    // zero-length direction is never normalized and no NaN can escape.
    let drag = if speed > 0.0 {
        velocity * (-params.drag_coefficient * speed)
    } else {
        Vec3::ZERO
    };

    // Control torques in the local frame. Authority grows with airspeed and
    // is floored so the stick is never dead.
    let speed_factor = (speed / FULL_AUTHORITY_SPEED).max(SPEED_FACTOR_FLOOR);
    let mut torque = Vec3::new(
        0.0,
        -controls.yaw() * params.yaw_sensitivity * TORQUE_FACTOR * speed_factor,
        -controls.roll() * params.roll_sensitivity * TORQUE_FACTOR * speed_factor,
    );
    if derived.stalled {
        // Gentle nose-down to help the dive that rebuilds airspeed.
        torque.x += STALL_NOSE_DOWN_BIAS * TORQUE_FACTOR;
    }

    (
        FlightForces {
            force: thrust + lift + drag,
            torque,
        },
        derived,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ControlState;

    fn level_body_with_speed(speed: f32) -> BodyState {
        BodyState {
            position: Vec3::new(0.0, 100.0, 0.0),
            rotation: Quat::IDENTITY,
            linear_velocity: Vec3::Z * speed,
        }
    }

    /// At rest and level, the net force is pure thrust: magnitude
    /// throttle × max_thrust_force along the forward axis.
    #[test]
    fn thrust_is_throttle_times_max_along_forward() {
        let params = FlightParameters::default();
        let body = BodyState::at_rest(Vec3::new(0.0, 10.0, 0.0));
        for &throttle in &[0.0, 0.25, 0.5, 1.0] {
            let controls = ControlState::new(throttle, 0.0, 0.0);
            let (forces, _) = compute_flight_forces(&body, &controls, &params);
            let expected = Vec3::Z * (throttle * params.max_thrust_force);
            assert!(
                (forces.force - expected).length() < 1e-4,
                "throttle {}: force {:?}",
                throttle,
                forces.force
            );
        }
    }

    /// Lift grows with the square of speed, and a stalled craft keeps only
    /// 15% of it at equal speed.
    #[test]
    fn lift_is_quadratic_and_collapses_in_stall() {
        let params = FlightParameters::default();
        let controls = ControlState::default();

        // Fast enough not to stall: lift = c * v^2 along +Y.
        let fast = 40.0; // ~78 kt
        let (forces, derived) = compute_flight_forces(&level_body_with_speed(fast), &controls, &params);
        assert!(!derived.stalled);
        let expected_lift = params.lift_coefficient * fast * fast;
        assert!((forces.force.y - expected_lift).abs() < 1e-3);

        // Slow enough to stall: observed lift is 0.15x the unstalled value.
        let slow = 10.0; // ~19 kt
        let (stalled_forces, stalled_derived) =
            compute_flight_forces(&level_body_with_speed(slow), &controls, &params);
        assert!(stalled_derived.stalled);
        let unstalled_lift = params.lift_coefficient * slow * slow;
        assert!(
            (stalled_forces.force.y - unstalled_lift * STALL_LIFT_MULTIPLIER).abs() < 1e-3,
            "stalled lift {}",
            stalled_forces.force.y
        );
    }

    /// Drag opposes the velocity vector with quadratic magnitude, and a
    /// zero-length velocity yields exactly zero drag (no NaN).
    #[test]
    fn drag_opposes_velocity() {
        let mut params = FlightParameters::default();
        params.lift_coefficient = 0.0; // isolate drag
        let controls = ControlState::default();

        let speed = 50.0;
        let body = level_body_with_speed(speed);
        let (forces, _) = compute_flight_forces(&body, &controls, &params);
        let expected = -params.drag_coefficient * speed * speed;
        assert!((forces.force.z - expected).abs() < 1e-3);

        let rest = BodyState::at_rest(Vec3::Y * 100.0);
        let (rest_forces, _) = compute_flight_forces(&rest, &controls, &params);
        assert!(rest_forces.force.is_finite());
        assert_eq!(rest_forces.force, Vec3::ZERO);
    }

    /// Yaw and roll torques oppose the sign of their inputs, scaled by
    /// sensitivity, torque factor, and the floored speed factor.
    #[test]
    fn torque_sign_convention() {
        let params = FlightParameters::default();
        let controls = ControlState::new(0.0, 1.0, 0.5);
        let body = level_body_with_speed(40.0);
        let (forces, _) = compute_flight_forces(&body, &controls, &params);

        let speed_factor = 40.0 / FULL_AUTHORITY_SPEED;
        let expected_yaw = -1.0 * params.yaw_sensitivity * TORQUE_FACTOR * speed_factor;
        let expected_roll = -0.5 * params.roll_sensitivity * TORQUE_FACTOR * speed_factor;
        assert!((forces.torque.y - expected_yaw).abs() < 1e-3);
        assert!((forces.torque.z - expected_roll).abs() < 1e-3);
    }

    /// Control authority is floored at half effectiveness when parked.
    #[test]
    fn control_authority_floored_at_rest() {
        let params = FlightParameters::default();
        let controls = ControlState::new(0.0, 1.0, 0.0);
        let body = BodyState::at_rest(Vec3::Y * 1.0);
        let (forces, _) = compute_flight_forces(&body, &controls, &params);
        let expected = -params.yaw_sensitivity * TORQUE_FACTOR * SPEED_FACTOR_FLOOR;
        assert!((forces.torque.y - expected).abs() < 1e-4);
    }

    /// A stalled craft gets the fixed nose-down pitch bias; a flying one
    /// gets none.
    #[test]
    fn stall_adds_nose_down_bias() {
        let params = FlightParameters::default();
        let controls = ControlState::default();

        let (stalled, derived) =
            compute_flight_forces(&level_body_with_speed(5.0), &controls, &params);
        assert!(derived.stalled);
        assert!((stalled.torque.x - STALL_NOSE_DOWN_BIAS * TORQUE_FACTOR).abs() < 1e-4);

        let (flying, derived) =
            compute_flight_forces(&level_body_with_speed(40.0), &controls, &params);
        assert!(!derived.stalled);
        assert_eq!(flying.torque.x, 0.0);
    }

    /// Derived readouts: speed magnitude, knots conversion, altitude feet.
    #[test]
    fn derived_state_readouts() {
        let params = FlightParameters::default();
        let controls = ControlState::default();
        let body = BodyState {
            position: Vec3::new(0.0, 304.8, 0.0), // 1000 ft
            rotation: Quat::IDENTITY,
            linear_velocity: Vec3::new(3.0, 0.0, 4.0), // 5 m/s
        };
        let (_, derived) = compute_flight_forces(&body, &controls, &params);
        assert!((derived.speed_ms - 5.0).abs() < 1e-5);
        assert!((derived.speed_knots - engine_core::ms_to_knots(5.0)).abs() < 1e-4);
        assert!((derived.altitude_feet - 1000.0).abs() < 0.01);
    }
}
