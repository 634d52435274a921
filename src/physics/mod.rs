//! Physics Module - the seam between blocks and the rigid-body engine
//!
//! The engine itself lives outside this crate. Blocks only talk to it through
//! the `PhysicsBody` trait and receive `CollisionContact`s from the host.

pub mod aabb;
pub mod body_data;
pub mod collision_data;
pub mod sim_body;

pub use aabb::{
    aabb_center, aabb_contains_point, aabb_from_center_half_extents, aabb_intersects,
    aabb_translated, create_aabb, AABB,
};
pub use body_data::{Axis, FrictionProfile, MaterialId, MotionConstraint, PhysicsBody};
pub use collision_data::{CollisionContact, SurfaceTag};
pub use sim_body::SimBody;

/// Entity ID type
pub type EntityId = u32;
