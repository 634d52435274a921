//! Body Data - what a block may change on its rigid body
//!
//! The engine owns the rigid body and its collider. A block borrows them for
//! the length of one callback through `PhysicsBody` and never stores them.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// World axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Positional constraint on a rigid body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionConstraint {
    /// Position along the axis is frozen
    LockedAxis(Axis),
    Free,
}

impl MotionConstraint {
    /// Constraint every block starts with: no drift out of the play plane
    pub const INITIAL: MotionConstraint = MotionConstraint::LockedAxis(Axis::Z);
}

/// Engine-side identifier of a physics material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialId(pub u32);

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Material({})", self.0)
    }
}

/// Which friction material the collider should be using
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrictionProfile {
    Frictionless,
    General,
}

/// Mutators a block needs from the physics engine
///
/// Implemented by the host's engine binding. Every call is a synchronous
/// property write on the simulation thread.
pub trait PhysicsBody {
    fn set_mass(&mut self, mass: f32);

    fn set_use_gravity(&mut self, enabled: bool);

    fn set_linear_velocity(&mut self, velocity: Vec3);

    /// Accumulate a force for the current step
    fn add_force(&mut self, force: Vec3);

    fn set_constraints(&mut self, constraint: MotionConstraint);

    fn set_collider_material(&mut self, material: MaterialId);
}
