//! Error types for the fallible edges of the crate.
//!
//! Parsing itself never fails. Only configuration I/O and output
//! serialization can, and they share this error type.

use thiserror::Error;

/// Errors raised while loading configuration or rendering results.
#[derive(Debug, Error)]
pub enum ArgsError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Convenience alias for results with [`ArgsError`].
pub type Result<T> = std::result::Result<T, ArgsError>;
