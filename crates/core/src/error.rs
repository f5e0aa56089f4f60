//! Core error types

use thiserror::Error;

/// Errors raised by the hex codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Input is not a well-formed hex string.
    #[error("Invalid input format: {reason}")]
    InvalidInputFormat { reason: String },
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
