//! Wind Module
//!
//! The wind subsystem decides strength and direction; blocks only read it
//! once per fixed step. `SharedWind` lets that subsystem keep changing the
//! values while every block holds a handle to the same state.

pub mod wind_data;
pub mod wind_operations;

pub use wind_data::{SharedWind, WindData, WindSource};
pub use wind_operations::{
    create_shared_wind, flip_direction, set_direction, set_strengths, snapshot, wind_force,
};
