//! Error types for binned accumulation
//!
//! Provides a unified error type for all ndbin crates.

use thiserror::Error;

/// Core error type for binned-accumulation operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid histogram configuration, fatal at construction
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Malformed fill coordinates (wrong count or missing axis name)
    #[error("Coordinate error: {0}")]
    Coordinates(String),

    /// Failure reported by an array-storage backend
    #[error("Store error: {0}")]
    Store(String),

    /// IO error (for file-backed stores)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an error for a coordinate count mismatch
    pub fn coordinate_count(expected: usize, actual: usize) -> Self {
        Self::Coordinates(format!(
            "expected {expected} coordinate values, got {actual}"
        ))
    }

    /// Create an error for a name-keyed fill missing a required axis
    pub fn missing_axis(name: &str) -> Self {
        Self::Coordinates(format!("no value supplied for axis {name}"))
    }

    /// Create a store error
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    /// True for the recoverable fill-time kind (absorption applies)
    pub fn is_coordinate_error(&self) -> bool {
        matches!(self, Self::Coordinates(_))
    }
}
