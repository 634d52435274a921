//! Collision classification by level type
//!
//! One rule per level type. Anything without a rule is a configuration
//! problem, never a loss.

use super::block_data::BlockLevelType;
use crate::physics::{CollisionContact, SurfaceTag};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    Safe,
    /// The collision loses the game
    Fallen,
    /// The block's level type is unassigned or unknown
    ConfigurationError,
}

/// Classify a collision-start against the block's level type
pub fn classify_collision(
    level_type: &BlockLevelType,
    contact: &CollisionContact,
) -> CollisionOutcome {
    match level_type {
        BlockLevelType::Foundation => classify_foundation(contact),
        BlockLevelType::Floor | BlockLevelType::Roof => classify_ground_sensitive(contact),
        BlockLevelType::Unassigned | BlockLevelType::Unrecognized(_) => classify_invalid(contact),
    }
}

/// Foundation blocks belong on the ground
fn classify_foundation(_contact: &CollisionContact) -> CollisionOutcome {
    CollisionOutcome::Safe
}

/// Floors and roofs must never touch the ground
fn classify_ground_sensitive(contact: &CollisionContact) -> CollisionOutcome {
    if contact.has_tag(&SurfaceTag::Ground) {
        CollisionOutcome::Fallen
    } else {
        CollisionOutcome::Safe
    }
}

fn classify_invalid(_contact: &CollisionContact) -> CollisionOutcome {
    CollisionOutcome::ConfigurationError
}
