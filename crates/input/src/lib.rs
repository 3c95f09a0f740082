//! Input handling: keyboard and touch funneled into flight control intents.
//!
//! Both input paths produce the same four boolean intents plus optional
//! continuous touch axes; `shaping` turns those into the per-frame
//! [`flight::ControlState`].

pub mod shaping;

pub use shaping::*;

use std::collections::HashSet;

/// Pixel travel of the touch joystick that maps to full deflection.
const JOYSTICK_MAX_DELTA: f32 = 60.0;

/// Manages raw input state for the current frame.
#[derive(Debug, Default)]
pub struct InputState {
    /// Keys currently held down.
    keys_held: HashSet<KeyCode>,
    /// Keys pressed this frame.
    keys_pressed: HashSet<KeyCode>,
    /// Keys released this frame.
    keys_released: HashSet<KeyCode>,

    /// Touch joystick deflection in [-1, 1], while a touch is active.
    joystick: Option<f32>,
    /// Touch throttle fraction in [0, 1], while a touch is active.
    touch_throttle: Option<f32>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear per-frame state. Call at the start of each frame.
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
    }

    /// Process a keyboard event.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if !self.keys_held.contains(&key) {
                    self.keys_pressed.insert(key);
                }
                self.keys_held.insert(key);
            }
            ElementState::Released => {
                self.keys_held.remove(&key);
                self.keys_released.insert(key);
            }
        }
    }

    /// Update the touch joystick from a horizontal drag, in pixels from the
    /// touch origin. Full deflection at ±60 px.
    pub fn process_joystick_drag(&mut self, delta_x_pixels: f32) {
        self.joystick = Some((delta_x_pixels / JOYSTICK_MAX_DELTA).clamp(-1.0, 1.0));
    }

    /// The joystick touch ended; keyboard yaw takes over again.
    pub fn end_joystick_touch(&mut self) {
        self.joystick = None;
    }

    /// Update the touch throttle strip, 0 at the bottom to 1 at the top.
    pub fn process_throttle_touch(&mut self, fraction: f32) {
        self.touch_throttle = Some(fraction.clamp(0.0, 1.0));
    }

    /// The throttle touch ended; the throttle holds its last value.
    pub fn end_throttle_touch(&mut self) {
        self.touch_throttle = None;
    }

    // Query methods

    /// Check if a key is currently held.
    pub fn is_key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    /// Check if a key was pressed this frame.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Check if a key was released this frame.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released.contains(&key)
    }

    // Flight intents

    /// Throttle up (W held).
    pub fn throttle_up(&self) -> bool {
        self.keys_held.contains(&KeyCode::KeyW)
    }

    /// Throttle down (S held).
    pub fn throttle_down(&self) -> bool {
        self.keys_held.contains(&KeyCode::KeyS)
    }

    /// Turn left (A held).
    pub fn turn_left(&self) -> bool {
        self.keys_held.contains(&KeyCode::KeyA)
    }

    /// Turn right (D held).
    pub fn turn_right(&self) -> bool {
        self.keys_held.contains(&KeyCode::KeyD)
    }

    /// Reset the simulation (R pressed this frame).
    pub fn reset_requested(&self) -> bool {
        self.keys_pressed.contains(&KeyCode::KeyR)
    }

    /// Current touch joystick deflection, if a touch is active.
    pub fn joystick(&self) -> Option<f32> {
        self.joystick
    }

    /// Current touch throttle fraction, if a touch is active.
    pub fn touch_throttle(&self) -> Option<f32> {
        self.touch_throttle
    }
}

// Re-export winit types so downstream crates don't need winit directly
pub use winit::event::ElementState;
pub use winit::keyboard::KeyCode;
