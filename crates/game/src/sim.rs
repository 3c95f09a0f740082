//! The simulation: one owned struct holding the physics world, the player
//! craft, and every per-frame subsystem. An external driver calls
//! [`Simulation::tick`] once per display frame.
//!
//! Tick ordering is a correctness invariant, not a style choice:
//! shape controls → compute and apply flight forces (once) → step the
//! backend → drain collisions → read the pose back → camera/HUD. Readers
//! of the body pose never observe a half-stepped world.

use engine_core::Transform;
use flight::{
    compute_flight_forces, BodyState, ControlState, DerivedFlightState, StallStateMachine,
};
use glam::Vec3;
use input::{ControlShaper, InputState};
use physics::{ColliderHandle, Impact, PhysicsWorld, RigidBodyHandle, StepLoop};
use procgen::CityLayout;

use crate::camera::{CameraPose, ChaseCamera};
use crate::config::GameConfig;
use crate::day_night::{DayNightCycle, SkyLighting};
use crate::hud::HudData;

/// Where the craft (re)spawns.
pub const SPAWN_POSITION: Vec3 = Vec3::new(0.0, 10.0, 0.0);
/// Craft mass, kg.
pub const CRAFT_MASS: f32 = 500.0;
/// Craft collision box half-extents: wingspan, body, length.
pub const CRAFT_HALF_EXTENTS: Vec3 = Vec3::new(5.0, 1.0, 4.0);

/// Physics handles for the player craft.
#[derive(Debug, Clone, Copy)]
struct CraftHandles {
    body: RigidBodyHandle,
    collider: ColliderHandle,
}

/// The whole simulation state, owned in one place and passed to each
/// subsystem per tick.
pub struct Simulation {
    config: GameConfig,
    physics: PhysicsWorld,
    step_loop: StepLoop,
    input: InputState,
    shaper: ControlShaper,
    craft: Option<CraftHandles>,
    craft_transform: Transform,
    stall: StallStateMachine,
    derived: DerivedFlightState,
    camera: ChaseCamera,
    day_night: DayNightCycle,
    city: CityLayout,
    impacts: Vec<Impact>,
    hud: HudData,
}

impl Simulation {
    /// Build the world: ground plane, procedural city obstacles, the player
    /// craft at its spawn pose.
    pub fn new(config: GameConfig) -> Self {
        let mut physics = PhysicsWorld::new();
        physics.add_ground_plane();

        let city = CityLayout::generate(&config.city);
        for building in &city.buildings {
            physics.add_static_cuboid(building.center, building.half_extents);
        }
        // Streetlights and road pads are render-only; the ground plane
        // already covers them for collisions.

        let (body, collider) = physics.spawn_craft(SPAWN_POSITION, CRAFT_MASS, CRAFT_HALF_EXTENTS);
        let craft_transform = Transform::from_position(SPAWN_POSITION);
        let day_night = DayNightCycle::new(config.day_night_speed);

        log::info!(
            "simulation ready: craft {} kg at {:?}, {} obstacles",
            CRAFT_MASS,
            SPAWN_POSITION,
            city.buildings.len()
        );

        Self {
            config,
            physics,
            step_loop: StepLoop::new(),
            input: InputState::new(),
            shaper: ControlShaper::new(),
            craft: Some(CraftHandles { body, collider }),
            craft_transform,
            stall: StallStateMachine::default(),
            derived: DerivedFlightState::default(),
            camera: ChaseCamera::snapped_to(&craft_transform),
            day_night,
            city,
            impacts: Vec::new(),
            hud: HudData::default(),
        }
    }

    /// Advance the simulation by one frame of `dt` seconds. The driver
    /// forwards input events before calling this.
    pub fn tick(&mut self, dt: f32) {
        if self.input.reset_requested() {
            self.reset();
        }

        self.shaper.update(&self.input, dt);
        self.day_night.advance(dt);

        // Without a craft there is nothing to fly; skip the physics part of
        // the tick rather than fail (the frame loop never stops).
        let Some(craft) = self.craft else {
            return;
        };
        let Some(snapshot) = self.physics.body_snapshot(craft.body) else {
            return;
        };

        // Forces from the pre-step state, applied exactly once.
        let body_state = BodyState {
            position: snapshot.position,
            rotation: snapshot.rotation,
            linear_velocity: snapshot.linear_velocity,
        };
        let (forces, derived) =
            compute_flight_forces(&body_state, self.shaper.controls(), &self.config.flight);
        self.derived = derived;
        self.stall.update(
            derived.speed_knots,
            snapshot.position.y,
            self.config.flight.min_stall_speed_knots,
        );
        self.physics
            .apply_flight_forces(craft.body, forces.force, forces.torque);

        self.step_loop.advance(&mut self.physics, dt);

        // Collisions are queued during stepping and handled here, after the
        // tick's integration is done.
        self.impacts = self.physics.drain_impacts(snapshot.linear_velocity);
        let hard_impact = self
            .impacts
            .iter()
            .any(|i| i.involves(craft.collider) && i.is_hard());
        if hard_impact {
            let speed = self
                .impacts
                .iter()
                .filter(|i| i.involves(craft.collider))
                .map(|i| i.impact_speed)
                .fold(0.0, f32::max);
            log::warn!("hard impact at {:.1} m/s", speed);
        }

        // Pose readback happens only after stepping completes.
        if let Some(transform) = self.physics.body_transform(craft.body) {
            self.craft_transform = transform;
        }
        self.camera.update(&self.craft_transform, dt);
        self.hud = HudData::assemble(
            &self.craft_transform,
            self.shaper.controls(),
            &self.derived,
            hard_impact,
        );
    }

    /// Re-initialize the craft to its spawn pose with zero velocity and
    /// clear all transient state. Safe to call repeatedly.
    pub fn reset(&mut self) {
        log::info!("simulation reset");
        if let Some(craft) = self.craft {
            self.physics.reset_body(craft.body, SPAWN_POSITION);
        }
        self.craft_transform = Transform::from_position(SPAWN_POSITION);
        self.shaper.reset();
        self.stall.reset();
        self.step_loop.reset();
        self.derived = DerivedFlightState::default();
        self.impacts.clear();
        self.camera.snap_to(&self.craft_transform);
        self.hud = HudData::default();
    }

    /// Input state, for the driver to feed events into.
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    /// The craft's pose as of the end of the last tick (for mesh sync).
    pub fn craft_transform(&self) -> &Transform {
        &self.craft_transform
    }

    /// Camera pose for the render collaborator.
    pub fn camera_pose(&self) -> CameraPose {
        self.camera.pose()
    }

    /// Lighting parameters for the current time of day.
    pub fn lighting(&self) -> SkyLighting {
        self.day_night.sample()
    }

    /// HUD readouts from the last tick.
    pub fn hud(&self) -> &HudData {
        &self.hud
    }

    /// Derived flight state from the last tick.
    pub fn derived(&self) -> &DerivedFlightState {
        &self.derived
    }

    /// Control state as shaped last tick.
    pub fn controls(&self) -> &ControlState {
        self.shaper.controls()
    }

    /// The generated city (for the render collaborator to mesh).
    pub fn city(&self) -> &CityLayout {
        &self.city
    }

    /// Collisions drained during the last tick.
    pub fn impacts(&self) -> &[Impact] {
        &self.impacts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use input::{ElementState, KeyCode};

    const DT: f32 = 1.0 / 60.0;

    fn quiet_config() -> GameConfig {
        // No buildings: tests that fly blind shouldn't depend on the city.
        let mut config = GameConfig::default();
        config.city.building_probability = 0.0;
        config
    }

    fn run(sim: &mut Simulation, frames: u32) {
        for _ in 0..frames {
            sim.input_mut().begin_frame();
            sim.tick(DT);
        }
    }

    /// Full throttle from spawn ramps to maximum and pushes the craft
    /// forward along +Z while it is airborne.
    #[test]
    fn throttle_accelerates_forward() {
        let mut sim = Simulation::new(quiet_config());
        sim.input_mut()
            .process_keyboard(KeyCode::KeyW, ElementState::Pressed);
        run(&mut sim, 240); // 4 seconds

        assert!(sim.controls().throttle() > 0.9);
        assert!(
            sim.craft_transform().position.z > 0.01,
            "z {}",
            sim.craft_transform().position.z
        );
    }

    /// The craft spawns slow and high: stalled from the first tick, and
    /// the HUD says so.
    #[test]
    fn spawn_is_stalled_until_speed_builds() {
        let mut sim = Simulation::new(quiet_config());
        run(&mut sim, 1);
        assert!(sim.derived().stalled);
        assert!(sim.hud().stall_warning);
    }

    /// Once the craft is sitting on the ground it is slow but NOT stalled.
    #[test]
    fn grounded_craft_is_not_stalled() {
        let mut sim = Simulation::new(quiet_config());
        run(&mut sim, 600); // 10 s: more than enough to fall and settle
        assert!(sim.craft_transform().position.y < flight::GROUND_CLEARANCE_M);
        assert!(!sim.derived().stalled);
        assert!(!sim.hud().stall_warning);
    }

    /// Reset is idempotent: two resets in a row produce identical state,
    /// and both land on the spawn pose with cleared controls.
    #[test]
    fn reset_is_idempotent() {
        let mut sim = Simulation::new(quiet_config());
        sim.input_mut()
            .process_keyboard(KeyCode::KeyW, ElementState::Pressed);
        run(&mut sim, 120);

        sim.reset();
        let first = *sim.craft_transform();
        sim.reset();
        let second = *sim.craft_transform();

        assert_eq!(first, second);
        assert_eq!(first.position, SPAWN_POSITION);
        assert_eq!(sim.controls().throttle(), 0.0);
        assert!(!sim.derived().stalled);
    }

    /// Pressing R triggers the reset path through a tick.
    #[test]
    fn reset_key_respawns() {
        let mut sim = Simulation::new(quiet_config());
        sim.input_mut()
            .process_keyboard(KeyCode::KeyW, ElementState::Pressed);
        run(&mut sim, 300);
        let flown = sim.craft_transform().position;
        assert!(flown != SPAWN_POSITION);

        sim.input_mut().begin_frame();
        sim.input_mut()
            .process_keyboard(KeyCode::KeyR, ElementState::Pressed);
        sim.tick(DT);
        // One tick of physics has run since the respawn; we should be at
        // (or within a frame of) the spawn pose.
        assert!((sim.craft_transform().position - SPAWN_POSITION).length() < 0.5);
    }

    /// The camera trails the craft: behind it along its flight direction
    /// and above it, once things settle.
    #[test]
    fn camera_trails_craft() {
        let mut sim = Simulation::new(quiet_config());
        sim.input_mut()
            .process_keyboard(KeyCode::KeyW, ElementState::Pressed);
        run(&mut sim, 240);

        let pose = sim.camera_pose();
        let craft = sim.craft_transform();
        // Behind: camera z below craft z for a +Z-flying craft.
        assert!(pose.position.z < craft.position.z);
        assert!((pose.position - craft.position).length() < 30.0);
    }

    /// Holding A while airborne swings the heading toward +X, which is
    /// left of the nose as seen from the chase camera.
    #[test]
    fn left_input_turns_left() {
        let mut sim = Simulation::new(quiet_config());
        let heading_before = sim.craft_transform().heading();

        // Turn during the initial fall: ground contact friction would
        // otherwise pin the yaw.
        sim.input_mut()
            .process_keyboard(KeyCode::KeyW, ElementState::Pressed);
        sim.input_mut()
            .process_keyboard(KeyCode::KeyA, ElementState::Pressed);
        run(&mut sim, 75);
        let heading_after = sim.craft_transform().heading();

        assert!(
            heading_after > heading_before,
            "heading {} -> {}",
            heading_before,
            heading_after
        );
    }
}
