//! Control shaping: raw intents to the per-frame control state.
//!
//! Keyboard input is boolean, so the throttle and yaw channels ramp over
//! time instead of snapping; releasing the turn keys decays yaw back to
//! center. Roll mirrors yaw — the coupled arcade scheme where one stick
//! axis banks and turns together. Touch axes, when active, override the
//! keyboard ramp with their continuous values.

use flight::ControlState;

use crate::InputState;

/// Throttle change per second of held W/S.
pub const THROTTLE_RATE: f32 = 0.5;
/// Yaw change per second of held A/D.
pub const TURN_RATE: f32 = 2.0;
/// Centering is this much faster than deflection.
pub const CENTERING_MULTIPLIER: f32 = 1.5;
/// Deflections smaller than this snap to exactly zero when centering.
pub const CENTER_SNAP: f32 = 0.01;

/// Integrates intents into a [`ControlState`] across frames.
#[derive(Debug, Default)]
pub struct ControlShaper {
    controls: ControlState,
}

impl ControlShaper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn controls(&self) -> &ControlState {
        &self.controls
    }

    /// Zero all channels (simulation reset).
    pub fn reset(&mut self) {
        self.controls.clear();
    }

    /// Advance the control state by one frame of input.
    pub fn update(&mut self, input: &InputState, dt: f32) {
        // Throttle: touch strip wins; otherwise ramp on W/S.
        if let Some(fraction) = input.touch_throttle() {
            self.controls.set_throttle(fraction);
        } else {
            let rate = THROTTLE_RATE * dt;
            if input.throttle_up() {
                self.controls.set_throttle(self.controls.throttle() + rate);
            } else if input.throttle_down() {
                self.controls.set_throttle(self.controls.throttle() - rate);
            }
        }

        // Yaw: touch joystick wins; otherwise ramp on A/D and decay to
        // center when neither is held.
        let yaw = if let Some(deflection) = input.joystick() {
            deflection
        } else {
            let rate = TURN_RATE * dt;
            let current = self.controls.yaw();
            if input.turn_left() {
                current - rate
            } else if input.turn_right() {
                current + rate
            } else {
                let centered = current * (1.0 - rate * CENTERING_MULTIPLIER).max(0.0);
                if centered.abs() < CENTER_SNAP {
                    0.0
                } else {
                    centered
                }
            }
        };
        self.controls.set_yaw(yaw);
        // Coupled arcade controls: bank follows the turn.
        self.controls.set_roll(self.controls.yaw());
    }
}
