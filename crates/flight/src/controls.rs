//! Player control state: the normalized intent snapshot consumed every tick.

/// Normalized control inputs for the current frame. Overwritten each frame
/// by the input layer; the flight model only ever reads it.
///
/// All fields stay inside their ranges — the setters clamp, and the input
/// layer feeds finite values only, so no NaN ever reaches the dynamics.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlState {
    /// Engine power command, 0 (idle) to 1 (full).
    throttle: f32,
    /// Rudder command, -1 (full left) to 1 (full right).
    yaw: f32,
    /// Aileron command, -1 (full left) to 1 (full right).
    roll: f32,
}

impl ControlState {
    /// Create a control state, clamping every channel into range.
    pub fn new(throttle: f32, yaw: f32, roll: f32) -> Self {
        let mut c = Self::default();
        c.set_throttle(throttle);
        c.set_yaw(yaw);
        c.set_roll(roll);
        c
    }

    pub fn throttle(&self) -> f32 {
        self.throttle
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn roll(&self) -> f32 {
        self.roll
    }

    pub fn set_throttle(&mut self, throttle: f32) {
        self.throttle = throttle.clamp(0.0, 1.0);
    }

    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw.clamp(-1.0, 1.0);
    }

    pub fn set_roll(&mut self, roll: f32) {
        self.roll = roll.clamp(-1.0, 1.0);
    }

    /// Zero all channels (used on reset).
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Out-of-range inputs are clamped on every channel.
    #[test]
    fn constructor_clamps() {
        let c = ControlState::new(1.7, -3.0, 2.5);
        assert_eq!(c.throttle(), 1.0);
        assert_eq!(c.yaw(), -1.0);
        assert_eq!(c.roll(), 1.0);
    }

    /// Setters clamp too; in-range values pass through unchanged.
    #[test]
    fn setters_clamp() {
        let mut c = ControlState::default();
        c.set_throttle(-0.5);
        assert_eq!(c.throttle(), 0.0);
        c.set_throttle(0.42);
        assert_eq!(c.throttle(), 0.42);
        c.set_yaw(0.3);
        assert_eq!(c.yaw(), 0.3);
    }

    /// clear() returns every channel to neutral.
    #[test]
    fn clear_resets() {
        let mut c = ControlState::new(1.0, 0.5, -0.5);
        c.clear();
        assert_eq!(c, ControlState::default());
    }
}
