//! Error handling for blockfall
//!
//! Only configuration loading can fail. Runtime callbacks on a block never
//! return errors; configuration problems found there are logged instead.

use std::path::PathBuf;

/// Main error type for blockfall
#[derive(Debug, thiserror::Error)]
pub enum StackError {
    #[error("IO error for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error in {context}: {error}")]
    ConfigParse { context: String, error: String },

    #[error("Invalid config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown block preset: {name}")]
    UnknownPreset { name: String },
}

/// Type alias for Results in blockfall
pub type StackResult<T> = Result<T, StackError>;

impl From<toml::de::Error> for StackError {
    fn from(error: toml::de::Error) -> Self {
        StackError::ConfigParse {
            context: "toml".to_string(),
            error: error.to_string(),
        }
    }
}

/// Convert Option to Result with a lazily built error
pub trait OptionExt<T> {
    fn ok_or_stack<F>(self, f: F) -> StackResult<T>
    where
        F: FnOnce() -> StackError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_stack<F>(self, f: F) -> StackResult<T>
    where
        F: FnOnce() -> StackError,
    {
        self.ok_or_else(f)
    }
}
