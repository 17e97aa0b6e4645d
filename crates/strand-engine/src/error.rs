//! Error types for the engine.

use strand_core::error::{CoreError, KeyError, PowError, ValidationError};
use thiserror::Error;

/// Errors that can occur while building or verifying events.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Payload field-shape validation failed; no partial event is returned.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Key material missing or unusable.
    #[error("key error: {0}")]
    Key(#[from] KeyError),

    /// Proof-of-work search gave up within its configured bound.
    #[error("proof-of-work error: {0}")]
    Pow(#[from] PowError),

    /// Malformed core data structure.
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// A kind builder rejected its input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
