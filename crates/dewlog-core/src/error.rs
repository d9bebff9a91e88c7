//! Core error types for dewlog-core.
//!
//! Every failure path is typed; the operation boundary converts errors into
//! transient user notices, so nothing here should ever take down the host.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for dewlog-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Rejected user input
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Import/export document errors
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Persistence errors
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Logged amounts must be positive, finite numbers of cups.
    #[error("Invalid amount: {0}")]
    InvalidAmount(f64),

    /// The daily goal must be a positive, finite number of cups.
    #[error("Invalid daily goal: {0}")]
    InvalidGoal(f64),

    /// Reminder times are zero-padded 24h clock readings.
    #[error("Invalid reminder time '{0}': expected HH:MM")]
    InvalidTime(String),

    /// The reminder set is unique by time.
    #[error("A reminder at {0} already exists")]
    DuplicateReminder(String),

    /// Index out of bounds
    #[error("Index {index} out of bounds for {collection} (length: {len})")]
    OutOfBounds {
        collection: &'static str,
        index: usize,
        len: usize,
    },
}

/// Snapshot document errors.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// The document did not parse; nothing was applied.
    #[error("Failed to parse snapshot document: {0}")]
    Parse(#[from] serde_json::Error),
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

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
