//! Block Data - Pure DOP
//!
//! Block state tables. Transformations live in block_operations.rs.

use crate::physics::{EntityId, FrictionProfile, MaterialId, MotionConstraint};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which part of the tower a block belongs to
///
/// Decides which collisions lose the game. `Unassigned` is what a block gets
/// when its configuration never set a level type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BlockLevelType {
    #[default]
    Unassigned,
    Foundation,
    Floor,
    Roof,
    /// A configured value this version does not know
    Unrecognized(String),
}

impl BlockLevelType {
    /// Parse a configuration value, ignoring case and surrounding whitespace
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "" | "none" | "unassigned" => BlockLevelType::Unassigned,
            "foundation" => BlockLevelType::Foundation,
            "floor" => BlockLevelType::Floor,
            "roof" => BlockLevelType::Roof,
            _ => BlockLevelType::Unrecognized(trimmed.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            BlockLevelType::Unassigned => "none",
            BlockLevelType::Foundation => "foundation",
            BlockLevelType::Floor => "floor",
            BlockLevelType::Roof => "roof",
            BlockLevelType::Unrecognized(value) => value,
        }
    }
}

impl From<String> for BlockLevelType {
    fn from(value: String) -> Self {
        BlockLevelType::parse(&value)
    }
}

impl From<BlockLevelType> for String {
    fn from(level_type: BlockLevelType) -> Self {
        level_type.as_str().to_string()
    }
}

impl fmt::Display for BlockLevelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Coarse lifecycle state, derived from the block's flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockLifecycle {
    Falling,
    PrePlaced,
    Placed,
}

/// Per-block state
#[derive(Debug, Clone, PartialEq)]
pub struct BlockData {
    pub id: EntityId,
    pub level_type: BlockLevelType,

    /// Mass while falling
    pub start_mass: f32,
    /// Mass once placed
    pub placed_mass: f32,

    pub frictionless_material: Option<MaterialId>,
    pub general_material: Option<MaterialId>,

    /// Set once by finalization, never cleared
    pub placed: bool,
    /// Set once by the first collision, never cleared
    pub has_been_pre_placed: bool,

    pub friction_profile: FrictionProfile,
    pub motion_constraint: MotionConstraint,

    // Diagnostics
    pub collisions_seen: u64,
    pub fallen_events: u64,
}
