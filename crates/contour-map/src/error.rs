//! Error types for the contour map pipeline.

use thiserror::Error;

/// Errors that can occur while building a contour map.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContourError {
    /// A configuration value is out of range or unrecognized.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The sample grid is empty, ragged, or contains non-finite values.
    #[error("malformed grid: {0}")]
    MalformedGrid(String),

    /// An internal value violated its invariant (e.g. a classification code outside 0..=80).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl ContourError {
    /// Create an InvalidConfiguration error.
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Create a MalformedGrid error.
    pub fn malformed_grid(msg: impl Into<String>) -> Self {
        Self::MalformedGrid(msg.into())
    }

    /// Create an InvalidArgument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

impl From<serde_json::Error> for ContourError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfiguration(err.to_string())
    }
}

/// Result type for contour map operations.
pub type Result<T> = std::result::Result<T, ContourError>;
