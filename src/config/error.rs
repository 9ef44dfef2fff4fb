//! Configuration errors.

use thiserror::Error;

/// Config load error
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Invalid configuration value
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A parameter is out of its valid range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
