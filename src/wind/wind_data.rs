//! Wind Data - Pure DOP
//!
//! Plain wind state plus the read-only view blocks query each tick.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Read access a block needs from a wind source
pub trait WindSource: Send + Sync {
    /// Strength applied to blocks that are not yet placed
    fn falling_strength(&self) -> f32;

    /// Strength applied to placed blocks
    fn placed_strength(&self) -> f32;

    fn is_directed_right(&self) -> bool;
}

/// Wind state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindData {
    pub falling_strength: f32,
    pub placed_strength: f32,
    pub directed_right: bool,
}

impl Default for WindData {
    fn default() -> Self {
        Self {
            falling_strength: 0.0,
            placed_strength: 0.0,
            directed_right: true,
        }
    }
}

impl WindSource for WindData {
    fn falling_strength(&self) -> f32 {
        self.falling_strength
    }

    fn placed_strength(&self) -> f32 {
        self.placed_strength
    }

    fn is_directed_right(&self) -> bool {
        self.directed_right
    }
}

/// Wind state shared between the wind subsystem and every block
#[derive(Debug, Clone, Default)]
pub struct SharedWind {
    pub state: Arc<RwLock<WindData>>,
}

impl WindSource for SharedWind {
    fn falling_strength(&self) -> f32 {
        self.state.read().falling_strength
    }

    fn placed_strength(&self) -> f32 {
        self.state.read().placed_strength
    }

    fn is_directed_right(&self) -> bool {
        self.state.read().directed_right
    }
}
