//! Stall state tracking.
//!
//! The stall condition itself is recomputed fresh every tick from
//! instantaneous speed and altitude — there is no hysteresis band or
//! minimum dwell time, so the flag can chatter right at the threshold.
//! That matches the tuned arcade feel; see DESIGN.md before changing it.

/// Altitude in meters below which the craft is considered on (or skimming)
/// the ground and cannot stall.
pub const GROUND_CLEARANCE_M: f32 = 3.0;

/// Aerodynamic state of the craft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StallState {
    /// Normal flight: full lift and control response.
    #[default]
    Flying,
    /// Airspeed has collapsed most of the lift; a nose-down torque bias
    /// helps the craft dive to recover speed.
    Stalled,
}

/// The stall predicate: too slow to fly, but high enough that "stall" means
/// anything. A craft sitting on the runway is slow, not stalled.
pub fn is_stalled(speed_knots: f32, altitude_m: f32, min_stall_speed_knots: f32) -> bool {
    speed_knots < min_stall_speed_knots && altitude_m > GROUND_CLEARANCE_M
}

/// Two-state machine over the stall predicate. Holds the current state so
/// transitions can be observed (HUD warning, logging); the state itself is
/// always whatever the predicate said last tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct StallStateMachine {
    state: StallState,
}

impl StallStateMachine {
    pub fn state(&self) -> StallState {
        self.state
    }

    pub fn is_stalled(&self) -> bool {
        self.state == StallState::Stalled
    }

    /// Re-evaluate the predicate for this tick. Returns `true` when the
    /// state changed, so the caller can react to the transition edge.
    pub fn update(&mut self, speed_knots: f32, altitude_m: f32, min_stall_speed_knots: f32) -> bool {
        let next = if is_stalled(speed_knots, altitude_m, min_stall_speed_knots) {
            StallState::Stalled
        } else {
            StallState::Flying
        };
        let changed = next != self.state;
        if changed {
            log::debug!("stall state {:?} -> {:?} at {:.1} kt", self.state, next, speed_knots);
        }
        self.state = next;
        changed
    }

    /// Force the machine back to `Flying` (simulation reset).
    pub fn reset(&mut self) {
        self.state = StallState::Flying;
    }
}
