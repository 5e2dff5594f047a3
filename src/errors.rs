// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GanttError {
    /// A required document field is absent or has the wrong shape.
    #[error("Schema error: {0}")]
    Schema(String),

    /// The answer references an operation the problem does not define.
    #[error("Unknown operation: id {operation_id} (problem has {operation_count} operations)")]
    UnknownOperation {
        operation_id: usize,
        operation_count: usize,
    },

    /// Geometry was requested before both documents were loaded.
    #[error("Precondition failed: {0}")]
    Precondition(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, GanttError>;
