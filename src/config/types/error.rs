//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

use super::ConfigDiagnostics;
use crate::resolve::ConfigShapeError;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config file `{0}` not found")]
    NotFound(PathBuf),

    #[error("config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported config version {0}, expected {1}")]
    Version(u32, u32),

    #[error(transparent)]
    Shape(#[from] ConfigShapeError),

    // No #[from]: source() would print the diagnostics twice
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}
