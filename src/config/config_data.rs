//! Config Data - Pure DOP
//!
//! Serde structures mirroring the TOML layout:
//!
//! ```toml
//! [wind]
//! falling_strength = 5.0
//! placed_strength = 8.0
//! directed_right = true
//!
//! [blocks.floor]
//! level_type = "floor"
//! start_mass = 1.0
//! placed_mass = 20.0
//! frictionless_material = 1
//! general_material = 2
//! ```

use crate::block::BlockLevelType;
use crate::physics::MaterialId;
use crate::wind::WindData;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Creation-time settings of one block; immutable afterwards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockConfig {
    pub level_type: BlockLevelType,
    pub start_mass: f32,
    pub placed_mass: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frictionless_material: Option<MaterialId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general_material: Option<MaterialId>,
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self {
            level_type: BlockLevelType::Unassigned,
            start_mass: 1.0,
            placed_mass: 20.0,
            frictionless_material: None,
            general_material: None,
        }
    }
}

/// Whole configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    /// Absent means no wind source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind: Option<WindData>,

    /// Named block presets
    pub blocks: BTreeMap<String, BlockConfig>,
}
