//! Core error types for mobroom-core.
//!
//! Every error here is recoverable: the failed operation leaves state
//! untouched and the caller surfaces it as a [`Notice`](crate::Notice).

use std::path::PathBuf;
use thiserror::Error;

use crate::timer::Phase;

/// Core error type for mobroom-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid user input
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Roster mutations that were refused
    #[error("Roster error: {0}")]
    Roster(#[from] RosterError),

    /// Commands the rotation engine refused
    #[error("Timer error: {0}")]
    Timer(#[from] TimerError),

    /// Stat or session persistence errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Value is NaN or infinite
    #[error("'{field}' must be a finite number")]
    NotFinite { field: &'static str },

    /// Value outside the accepted range
    #[error("'{field}' must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Roster errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("member name is empty")]
    EmptyName,

    #[error("'{0}' is already on the team")]
    Duplicate(String),

    /// Commas separate members in session links.
    #[error("member name '{0}' must not contain ','")]
    ReservedCharacter(String),

    #[error("'{0}' is not on the team")]
    UnknownMember(String),

    #[error("new order must contain exactly the current members")]
    MembershipMismatch,

    #[error("position {position} out of bounds for a team of {len}")]
    OutOfBounds { position: usize, len: usize },
}

/// Rotation engine errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    #[error("Please add team members first!")]
    EmptyRoster,

    #[error("cannot {operation} while {phase}")]
    InvalidPhase {
        operation: &'static str,
        phase: Phase,
    },
}

/// Storage errors.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Stored data is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// Backend refused the write (full, disabled, read-only)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
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

    /// Unknown dot-path key
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Home or data directory could not be determined or created
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
