//! Simulated body - a minimal `PhysicsBody` for hosts without an engine
//!
//! Records every property a block writes and integrates with semi-implicit
//! Euler. No collision response: the host decides when contacts happen.

use super::aabb::{aabb_from_center_half_extents, AABB};
use super::body_data::{Axis, MaterialId, MotionConstraint, PhysicsBody};
use glam::Vec3;

/// Standard gravity used by `SimBody::integrate`
pub const GRAVITY: Vec3 = Vec3::new(0.0, -9.81, 0.0);

#[derive(Debug, Clone)]
pub struct SimBody {
    pub position: Vec3,
    pub half_extents: Vec3,
    pub mass: f32,
    pub use_gravity: bool,
    pub linear_velocity: Vec3,
    pub force_accumulator: Vec3,
    pub constraint: MotionConstraint,
    pub material: Option<MaterialId>,
    /// Force consumed by the most recent `integrate` call
    pub last_step_force: Vec3,
}

impl SimBody {
    /// Unit-mass body at `position`, gravity off, unconstrained
    pub fn new(position: Vec3, half_extents: Vec3) -> Self {
        Self {
            position,
            half_extents,
            mass: 1.0,
            use_gravity: false,
            linear_velocity: Vec3::ZERO,
            force_accumulator: Vec3::ZERO,
            constraint: MotionConstraint::Free,
            material: None,
            last_step_force: Vec3::ZERO,
        }
    }

    pub fn bounds(&self) -> AABB {
        aabb_from_center_half_extents(self.position, self.half_extents)
    }

    /// Advance one fixed step and clear the force accumulator
    pub fn integrate(&mut self, dt: f32) {
        let mut acceleration = if self.mass > 0.0 {
            self.force_accumulator / self.mass
        } else {
            Vec3::ZERO
        };
        if self.use_gravity {
            acceleration += GRAVITY;
        }

        self.linear_velocity += acceleration * dt;
        if let MotionConstraint::LockedAxis(axis) = self.constraint {
            match axis {
                Axis::X => self.linear_velocity.x = 0.0,
                Axis::Y => self.linear_velocity.y = 0.0,
                Axis::Z => self.linear_velocity.z = 0.0,
            }
        }
        self.position += self.linear_velocity * dt;

        self.last_step_force = self.force_accumulator;
        self.force_accumulator = Vec3::ZERO;
    }
}

impl PhysicsBody for SimBody {
    fn set_mass(&mut self, mass: f32) {
        self.mass = mass;
    }

    fn set_use_gravity(&mut self, enabled: bool) {
        self.use_gravity = enabled;
    }

    fn set_linear_velocity(&mut self, velocity: Vec3) {
        self.linear_velocity = velocity;
    }

    fn add_force(&mut self, force: Vec3) {
        self.force_accumulator += force;
    }

    fn set_constraints(&mut self, constraint: MotionConstraint) {
        self.constraint = constraint;
    }

    fn set_collider_material(&mut self, material: MaterialId) {
        self.material = Some(material);
    }
}
