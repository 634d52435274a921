//! Block Operations - DOP Functions
//!
//! Functions that transform BlockData and push the matching property writes
//! into the block's physics body. Events are returned, not sent, so callers
//! decide where they go.

use super::block_data::{BlockData, BlockLevelType, BlockLifecycle};
use super::block_events::{BlockEvent, FallCause};
use super::classification::{classify_collision, CollisionOutcome};
use crate::config::BlockConfig;
use crate::physics::{
    CollisionContact, EntityId, FrictionProfile, MotionConstraint, PhysicsBody, SurfaceTag,
};
use crate::wind::{wind_force, WindSource};
use glam::Vec3;

// ============================================================================
// CREATION
// ============================================================================

/// Create block state from its configuration and initialize its body
///
/// The body gets the start mass, the frictionless material and the initial
/// axis lock.
pub fn create_block(id: EntityId, config: &BlockConfig, body: &mut dyn PhysicsBody) -> BlockData {
    let mut block = BlockData {
        id,
        level_type: config.level_type.clone(),
        start_mass: config.start_mass,
        placed_mass: config.placed_mass,
        frictionless_material: config.frictionless_material,
        general_material: config.general_material,
        placed: false,
        has_been_pre_placed: false,
        friction_profile: FrictionProfile::Frictionless,
        motion_constraint: MotionConstraint::INITIAL,
        collisions_seen: 0,
        fallen_events: 0,
    };

    body.set_mass(block.start_mass);
    apply_friction(&mut block, body, FrictionProfile::Frictionless);
    body.set_constraints(block.motion_constraint);

    log::debug!(
        "[Block {}] Created as {} block (mass {} -> {})",
        id,
        block.level_type,
        block.start_mass,
        block.placed_mass
    );

    block
}

/// Switch the collider to the material for `profile`
///
/// Missing materials are a configuration error: logged, and the collider
/// keeps whatever material it had.
fn apply_friction(block: &mut BlockData, body: &mut dyn PhysicsBody, profile: FrictionProfile) {
    if block.frictionless_material.is_none() || block.general_material.is_none() {
        log::error!(
            "[Block {}] No friction material assigned (frictionless: {:?}, general: {:?}). Check the block configuration.",
            block.id,
            block.frictionless_material,
            block.general_material
        );
    }

    block.friction_profile = profile;
    let material = match profile {
        FrictionProfile::Frictionless => block.frictionless_material,
        FrictionProfile::General => block.general_material,
    };
    if let Some(material) = material {
        body.set_collider_material(material);
    }
}

// ============================================================================
// PHYSICS CALLBACKS
// ============================================================================

/// Handle a collision-start notification
///
/// Classification runs first; the one-time pre-placement follows in the same
/// call. Returned events are in that order.
pub fn handle_collision(
    block: &mut BlockData,
    body: &mut dyn PhysicsBody,
    contact: &CollisionContact,
) -> Vec<BlockEvent> {
    let mut events = Vec::new();
    block.collisions_seen += 1;

    match classify_collision(&block.level_type, contact) {
        CollisionOutcome::Safe => {
            log::debug!(
                "[Block {}] Collision with entity {} is safe",
                block.id,
                contact.other
            );
        }
        CollisionOutcome::Fallen => {
            log::info!(
                "[Block {}] {} block placed on ground surface. Lose game",
                block.id,
                block.level_type
            );
            block.fallen_events += 1;
            events.push(BlockEvent::Fallen {
                block: block.id,
                cause: FallCause::GroundContact,
            });
        }
        CollisionOutcome::ConfigurationError => match &block.level_type {
            BlockLevelType::Unrecognized(value) => log::error!(
                "[Block {}] Unknown block level type: {}. Check the block configuration.",
                block.id,
                value
            ),
            _ => log::error!(
                "[Block {}] Block level type is unassigned. Check the block configuration.",
                block.id
            ),
        },
    }

    if !block.has_been_pre_placed {
        block.has_been_pre_placed = true;
        block.motion_constraint = MotionConstraint::Free;
        body.set_constraints(MotionConstraint::Free);

        log::info!("[Block {}] Pre-placed, constraints released", block.id);
        events.push(BlockEvent::PrePlaced { block: block.id });
    }

    events
}

/// Handle the block entering the boundary zone around the play area
///
/// Fires on every entry, whatever the level type or placement state.
pub fn handle_boundary_enter(block: &mut BlockData) -> BlockEvent {
    log::info!("[Block {}] Block has fallen out of bounds. Lose game", block.id);
    block.fallen_events += 1;
    BlockEvent::Fallen {
        block: block.id,
        cause: FallCause::OutOfBounds,
    }
}

/// Handle a trigger-enter notification; only the boundary zone matters
pub fn handle_trigger_enter(block: &mut BlockData, zone: &CollisionContact) -> Option<BlockEvent> {
    if zone.has_tag(&SurfaceTag::BoundingBox) {
        Some(handle_boundary_enter(block))
    } else {
        None
    }
}

/// Apply this step's wind force to the body and return it
///
/// Runs every fixed step in every lifecycle state. Without a wind source
/// nothing is applied.
pub fn apply_fixed_step(
    block: &BlockData,
    body: &mut dyn PhysicsBody,
    wind: Option<&dyn WindSource>,
) -> Vec3 {
    if wind.is_none() {
        return Vec3::ZERO;
    }

    let force = wind_force(wind, block.placed);
    body.add_force(force);
    log::trace!("[Block {}] Wind force {:?}", block.id, force);
    force
}

// ============================================================================
// PLACEMENT
// ============================================================================

/// Finalize the block as placed
///
/// No precondition. Calling it again rewrites the same values.
pub fn finalize_placement(block: &mut BlockData, body: &mut dyn PhysicsBody) {
    apply_friction(block, body, FrictionProfile::General);
    body.set_use_gravity(true);
    body.set_mass(block.placed_mass);
    body.set_linear_velocity(Vec3::ZERO);

    if !block.placed {
        log::info!(
            "[Block {}] Placed (mass {})",
            block.id,
            block.placed_mass
        );
    }
    block.placed = true;
}

// ============================================================================
// QUERIES
// ============================================================================

pub fn is_placed(block: &BlockData) -> bool {
    block.placed
}

pub fn level_type(block: &BlockData) -> &BlockLevelType {
    &block.level_type
}

pub fn lifecycle(block: &BlockData) -> BlockLifecycle {
    if block.placed {
        BlockLifecycle::Placed
    } else if block.has_been_pre_placed {
        BlockLifecycle::PrePlaced
    } else {
        BlockLifecycle::Falling
    }
}
