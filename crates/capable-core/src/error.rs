//! Core error types for capable-core.
//!
//! Failure over task data is deliberately soft: store operations degrade
//! to no-ops or defaults rather than propagating errors. The types here
//! cover the places where an error is genuinely actionable -- opening the
//! database, loading configuration, and parsing user-supplied values.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for capable-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A day identifier that is not a valid `YYYY-MM-DD` date
    #[error("Invalid day identifier '{value}' (expected YYYY-MM-DD)")]
    InvalidDay { value: String },

    /// A quadrant name that does not match any of the four categories
    #[error("Unknown quadrant '{0}' (expected do, schedule, delegate or eliminate)")]
    UnknownQuadrant(String),

    /// A view mode name that is neither matrix nor focus
    #[error("Unknown view mode '{0}' (expected matrix or focus)")]
    UnknownViewMode(String),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open database connection
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Data directory could not be created or determined
    #[error("Data directory unavailable: {0}")]
    DataDir(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        StorageError::QueryFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
