//! Error types for the Kohonen tracer.

use thiserror::Error;

/// The main error type for SOM operations.
#[derive(Error, Debug)]
pub enum TracerError {
    /// The weight matrix has no nodes, so no BMU can exist.
    #[error("SOM has no nodes")]
    EmptyMap,

    /// Samples and nodes disagree on the number of features.
    #[error("Feature dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Features per node.
        expected: usize,
        /// Features per sample.
        found: usize,
    },

    /// Stopping threshold outside the open interval (0, 1).
    #[error("alpha_min must lie in (0, 1), got {0}")]
    InvalidAlpha(f64),

    /// A matrix could not be built from the given data.
    #[error("Invalid matrix shape: {0}")]
    InvalidShape(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for tracer operations.
pub type Result<T> = std::result::Result<T, TracerError>;

impl From<serde_json::Error> for TracerError {
    fn from(err: serde_json::Error) -> Self {
        TracerError::Serialization(err.to_string())
    }
}
