//! Physics world management with Rapier3D.

use engine_core::Transform;
use glam::{Quat, Vec3};
use rapier3d::crossbeam::channel::{unbounded, Receiver};
use rapier3d::na::UnitQuaternion;
use rapier3d::pipeline::ChannelEventCollector;
use rapier3d::prelude::*;

use crate::collision::{CollisionGroup, Impact};
use crate::step::FIXED_TIMESTEP;

/// Global gravity, m/s². Every dynamic body feels this; the flight model
/// never adds its own gravity term.
pub const GRAVITY_Y: f32 = -9.82;

/// Shared contact material: slick enough that a landed craft skids rather
/// than sticking.
pub const CONTACT_FRICTION: f32 = 0.1;
/// Shared contact restitution.
pub const CONTACT_RESTITUTION: f32 = 0.2;

fn env_collision_groups() -> InteractionGroups {
    let (membership, filter) = CollisionGroup::environment();
    InteractionGroups::new(membership, filter)
}

/// Kinematic state of a body, read back once per tick after stepping.
#[derive(Debug, Clone, Copy)]
pub struct BodySnapshot {
    /// World-space position in meters.
    pub position: Vec3,
    /// World-space orientation (unit quaternion).
    pub rotation: Quat,
    /// World-space linear velocity in m/s.
    pub linear_velocity: Vec3,
    /// World-space angular velocity in rad/s.
    pub angular_velocity: Vec3,
}

/// Main physics world containing all simulation state.
pub struct PhysicsWorld {
    pub rigid_body_set: RigidBodySet,
    pub collider_set: ColliderSet,
    pub gravity: Vector<Real>,
    pub integration_parameters: IntegrationParameters,
    pub physics_pipeline: PhysicsPipeline,
    pub island_manager: IslandManager,
    pub broad_phase: DefaultBroadPhase,
    pub narrow_phase: NarrowPhase,
    pub impulse_joint_set: ImpulseJointSet,
    pub multibody_joint_set: MultibodyJointSet,
    pub ccd_solver: CCDSolver,
    pub query_pipeline: QueryPipeline,
    event_collector: ChannelEventCollector,
    collision_recv: Receiver<CollisionEvent>,
    contact_force_recv: Receiver<ContactForceEvent>,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsWorld {
    /// Create a new physics world with skylane gravity and the fixed
    /// sub-step size baked into the integration parameters.
    pub fn new() -> Self {
        let (collision_send, collision_recv) = unbounded();
        let (contact_force_send, contact_force_recv) = unbounded();
        Self {
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            gravity: vector![0.0, GRAVITY_Y, 0.0],
            integration_parameters: IntegrationParameters {
                dt: FIXED_TIMESTEP,
                ..Default::default()
            },
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            event_collector: ChannelEventCollector::new(collision_send, contact_force_send),
            collision_recv,
            contact_force_recv,
        }
    }

    /// Run one fixed-size integration sub-step. Use
    /// [`crate::StepLoop::advance`] rather than calling this directly so
    /// frame time is accumulated and bounded correctly.
    pub(crate) fn step_once(&mut self) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &self.event_collector,
        );
    }

    /// Add the flat ground half-space at y=0.
    pub fn add_ground_plane(&mut self) -> ColliderHandle {
        let collider = ColliderBuilder::halfspace(Vector::y_axis())
            .friction(CONTACT_FRICTION)
            .restitution(CONTACT_RESTITUTION)
            .collision_groups(env_collision_groups())
            .build();
        self.collider_set.insert(collider)
    }

    /// Add a static box obstacle (building). `center` is the world position
    /// of the box center, `half_extents` its half sizes.
    pub fn add_static_cuboid(&mut self, center: Vec3, half_extents: Vec3) -> ColliderHandle {
        let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
            .translation(vector![center.x, center.y, center.z])
            .friction(CONTACT_FRICTION)
            .restitution(CONTACT_RESTITUTION)
            .collision_groups(env_collision_groups())
            .build();
        self.collider_set.insert(collider)
    }

    /// Spawn the player craft: a dynamic box body with the given mass.
    /// Angular damping settles rotations; linear damping is zero because
    /// the flight model supplies its own drag.
    pub fn spawn_craft(
        &mut self,
        position: Vec3,
        mass: f32,
        half_extents: Vec3,
    ) -> (RigidBodyHandle, ColliderHandle) {
        let body = RigidBodyBuilder::dynamic()
            .translation(vector![position.x, position.y, position.z])
            .linear_damping(0.0)
            .angular_damping(0.5)
            .build();
        let body_handle = self.rigid_body_set.insert(body);

        let (membership, filter) = CollisionGroup::craft();
        let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
            .mass(mass)
            .friction(CONTACT_FRICTION)
            .restitution(CONTACT_RESTITUTION)
            .collision_groups(InteractionGroups::new(membership, filter))
            .active_events(ActiveEvents::COLLISION_EVENTS)
            .build();
        let collider_handle =
            self.collider_set
                .insert_with_parent(collider, body_handle, &mut self.rigid_body_set);
        (body_handle, collider_handle)
    }

    /// Read a body's kinematic state. `None` if the handle is stale.
    pub fn body_snapshot(&self, handle: RigidBodyHandle) -> Option<BodySnapshot> {
        self.rigid_body_set.get(handle).map(|body| {
            let pos = body.translation();
            let rot = body.rotation();
            let linvel = body.linvel();
            let angvel = body.angvel();
            BodySnapshot {
                position: Vec3::new(pos.x, pos.y, pos.z),
                rotation: Quat::from_xyzw(rot.i, rot.j, rot.k, rot.w),
                linear_velocity: Vec3::new(linvel.x, linvel.y, linvel.z),
                angular_velocity: Vec3::new(angvel.x, angvel.y, angvel.z),
            }
        })
    }

    /// Read a body's pose as a Transform (for mesh sync by the render
    /// collaborator).
    pub fn body_transform(&self, handle: RigidBodyHandle) -> Option<Transform> {
        self.body_snapshot(handle)
            .map(|s| Transform::from_position_rotation(s.position, s.rotation))
    }

    /// Replace the forces on a body for this frame: a world-space force at
    /// the center of mass and a torque given in the body's LOCAL frame
    /// (rotated to world space here, at apply time). Call exactly once per
    /// frame, before stepping.
    pub fn apply_flight_forces(
        &mut self,
        handle: RigidBodyHandle,
        force: Vec3,
        local_torque: Vec3,
    ) {
        let Some(body) = self.rigid_body_set.get_mut(handle) else {
            return;
        };
        let rot = body.rotation();
        let world_torque =
            Quat::from_xyzw(rot.i, rot.j, rot.k, rot.w) * local_torque;

        body.reset_forces(true);
        body.reset_torques(true);
        body.add_force(vector![force.x, force.y, force.z], true);
        body.add_torque(
            vector![world_torque.x, world_torque.y, world_torque.z],
            true,
        );
    }

    /// Teleport a body to a spawn pose with identity orientation and zero
    /// velocities, clearing any accumulated forces.
    pub fn reset_body(&mut self, handle: RigidBodyHandle, position: Vec3) {
        let Some(body) = self.rigid_body_set.get_mut(handle) else {
            return;
        };
        body.reset_forces(true);
        body.reset_torques(true);
        body.set_translation(vector![position.x, position.y, position.z], true);
        body.set_rotation(UnitQuaternion::identity(), true);
        body.set_linvel(vector![0.0, 0.0, 0.0], true);
        body.set_angvel(vector![0.0, 0.0, 0.0], true);
    }

    /// Drain collision events gathered during stepping into a list of
    /// impacts. `reference_velocity` is the watched body's velocity captured
    /// before the step; the impact speed is its component along the contact
    /// normal. Call once per tick, after stepping — never react inside the
    /// event handler itself.
    pub fn drain_impacts(&mut self, reference_velocity: Vec3) -> Vec<Impact> {
        let mut impacts = Vec::new();
        while let Ok(event) = self.collision_recv.try_recv() {
            if let CollisionEvent::Started(c1, c2, _) = event {
                let impact_speed = self
                    .narrow_phase
                    .contact_pair(c1, c2)
                    .and_then(|pair| pair.manifolds.first())
                    .map(|manifold| {
                        let n = manifold.data.normal;
                        reference_velocity
                            .dot(Vec3::new(n.x, n.y, n.z))
                            .abs()
                    })
                    .unwrap_or_else(|| reference_velocity.length());
                impacts.push(Impact {
                    first: c1,
                    second: c2,
                    impact_speed,
                });
            }
        }
        // Contact force events are not consumed; drain so the channel
        // cannot grow without bound.
        while self.contact_force_recv.try_recv().is_ok() {}
        impacts
    }
}
