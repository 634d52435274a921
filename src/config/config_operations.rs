//! Config Operations
//!
//! Loading and validation of `StackConfig`.

use super::config_data::{BlockConfig, StackConfig};
use crate::block::BlockLevelType;
use crate::error::{OptionExt, StackError, StackResult};
use std::path::Path;

/// Parse and validate a TOML configuration
pub fn from_toml_str(source: &str) -> StackResult<StackConfig> {
    let config: StackConfig = toml::from_str(source)?;
    validate_stack_config(&config)?;
    Ok(config)
}

/// Read, parse and validate a TOML configuration file
pub fn load_from_file(path: impl AsRef<Path>) -> StackResult<StackConfig> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|source| StackError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config = from_toml_str(&source).map_err(|err| match err {
        StackError::ConfigParse { error, .. } => StackError::ConfigParse {
            context: path.display().to_string(),
            error,
        },
        other => other,
    })?;

    log::info!(
        "[Config] Loaded {} block preset(s) from {} (wind: {})",
        config.blocks.len(),
        path.display(),
        if config.wind.is_some() { "on" } else { "off" }
    );
    Ok(config)
}

/// Check one block preset
///
/// Masses must be finite and positive. Level type problems only produce a
/// warning here; the block reports them again when it collides.
pub fn validate_block_config(name: &str, config: &BlockConfig) -> StackResult<()> {
    for (field, mass) in [
        ("start_mass", config.start_mass),
        ("placed_mass", config.placed_mass),
    ] {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(StackError::InvalidConfig {
                field: format!("blocks.{}.{}", name, field),
                value: mass.to_string(),
                reason: "mass must be a positive number".to_string(),
            });
        }
    }

    match &config.level_type {
        BlockLevelType::Unassigned => {
            log::warn!("[Config] Block preset '{}' has no level type", name)
        }
        BlockLevelType::Unrecognized(value) => log::warn!(
            "[Config] Block preset '{}' has unknown level type '{}'",
            name,
            value
        ),
        _ => {}
    }

    if config.frictionless_material.is_none() || config.general_material.is_none() {
        log::warn!(
            "[Config] Block preset '{}' is missing a friction material",
            name
        );
    }

    Ok(())
}

/// Check every preset and the wind settings
pub fn validate_stack_config(config: &StackConfig) -> StackResult<()> {
    for (name, block) in &config.blocks {
        validate_block_config(name, block)?;
    }

    if let Some(wind) = &config.wind {
        for (field, strength) in [
            ("falling_strength", wind.falling_strength),
            ("placed_strength", wind.placed_strength),
        ] {
            if !strength.is_finite() {
                return Err(StackError::InvalidConfig {
                    field: format!("wind.{}", field),
                    value: strength.to_string(),
                    reason: "strength must be finite".to_string(),
                });
            }
        }
    }

    Ok(())
}

/// Look up a block preset by name
pub fn block_preset<'a>(config: &'a StackConfig, name: &str) -> StackResult<&'a BlockConfig> {
    config
        .blocks
        .get(name)
        .ok_or_stack(|| StackError::UnknownPreset {
            name: name.to_string(),
        })
}
