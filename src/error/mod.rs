//! Error handling for the evaluation engine.
//!
//! Clinical data problems (blank or non-numeric fields) never surface here;
//! they resolve to skipped rules or criterion error strings. These errors only
//! arise at string and file boundaries.

use std::io;

/// Specialized error type for the evaluation engine
#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    /// A measurement code name outside the fixed vocabulary
    #[error("Unknown measurement code: {0}")]
    UnknownCode(String),

    /// Configuration values that cannot be used
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error decoding or encoding JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EvaluationError {
    /// Create an unknown code error
    pub fn unknown_code(name: impl Into<String>) -> Self {
        Self::UnknownCode(name.into())
    }

    /// Create an invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

/// Result type for evaluation engine operations
pub type Result<T> = std::result::Result<T, EvaluationError>;
