//! Configuration - block presets and wind, loaded from TOML
//!
//! Masses are checked when a file is loaded. Level types and friction
//! materials are not: a block with a bad level type or missing materials
//! still runs, and reports the problem in the log when it matters.

pub mod config_data;
pub mod config_operations;

pub use config_data::{BlockConfig, StackConfig};
pub use config_operations::{
    block_preset, from_toml_str, load_from_file, validate_block_config, validate_stack_config,
};
