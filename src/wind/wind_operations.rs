//! Wind Operations - Pure DOP Functions
//!
//! Functions that read or transform wind state.

use super::wind_data::{SharedWind, WindData, WindSource};
use glam::Vec3;
use parking_lot::RwLock;
use std::sync::Arc;

/// Wrap wind data so it can be handed to many blocks
pub fn create_shared_wind(data: WindData) -> SharedWind {
    SharedWind {
        state: Arc::new(RwLock::new(data)),
    }
}

/// Force the wind exerts on one block this step
///
/// Placed blocks feel the placed strength, everything else the falling
/// strength. The force is purely horizontal. No source means no force.
pub fn wind_force(source: Option<&dyn WindSource>, placed: bool) -> Vec3 {
    let Some(source) = source else {
        return Vec3::ZERO;
    };

    let strength = if placed {
        source.placed_strength()
    } else {
        source.falling_strength()
    };

    if source.is_directed_right() {
        Vec3::X * strength
    } else {
        -Vec3::X * strength
    }
}

/// Copy of the current wind state
pub fn snapshot(wind: &SharedWind) -> WindData {
    *wind.state.read()
}

pub fn set_direction(wind: &SharedWind, directed_right: bool) {
    wind.state.write().directed_right = directed_right;
}

/// Reverse the wind and return the new direction
pub fn flip_direction(wind: &SharedWind) -> bool {
    let mut state = wind.state.write();
    state.directed_right = !state.directed_right;
    log::debug!(
        "[Wind] Direction flipped, now blowing {}",
        if state.directed_right { "right" } else { "left" }
    );
    state.directed_right
}

pub fn set_strengths(wind: &SharedWind, falling_strength: f32, placed_strength: f32) {
    let mut state = wind.state.write();
    state.falling_strength = falling_strength;
    state.placed_strength = placed_strength;
}
