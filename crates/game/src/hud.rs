//! HUD data for a frame: everything the DOM/canvas HUD collaborator needs
//! to draw, with no drawing done here.

use engine_core::Transform;
use flight::{ControlState, DerivedFlightState};

/// Minimap scale: world meters per minimap pixel.
pub const MINIMAP_SCALE: f32 = 50.0;

/// Player marker on the minimap, relative to the map center.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MinimapMarker {
    /// Pixels right of center.
    pub x: f32,
    /// Pixels down from center (world +Z maps up the screen).
    pub y: f32,
    /// Marker rotation in radians.
    pub heading: f32,
}

/// All HUD readouts for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HudData {
    /// Throttle as a whole percentage, 0–100.
    pub throttle_percent: f32,
    /// Airspeed in knots.
    pub speed_knots: f32,
    /// Altitude in feet, floored at zero for display.
    pub altitude_feet: f32,
    /// Compass heading in radians; the needle rotates by its negative.
    pub heading: f32,
    /// Show the stall warning.
    pub stall_warning: bool,
    /// A hard collision happened this frame (flash the screen, play the
    /// crunch).
    pub hard_impact: bool,
    pub minimap: MinimapMarker,
}

impl HudData {
    /// Assemble the frame's readouts from the craft pose, control state,
    /// and derived flight state.
    pub fn assemble(
        craft: &Transform,
        controls: &ControlState,
        derived: &DerivedFlightState,
        hard_impact: bool,
    ) -> Self {
        let heading = craft.heading();
        Self {
            throttle_percent: controls.throttle() * 100.0,
            speed_knots: derived.speed_knots,
            altitude_feet: derived.altitude_feet.max(0.0),
            heading,
            stall_warning: derived.stalled,
            hard_impact,
            minimap: MinimapMarker {
                x: craft.position.x / MINIMAP_SCALE,
                y: -craft.position.z / MINIMAP_SCALE,
                heading,
            },
        }
    }
}
