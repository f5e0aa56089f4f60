//! Error taxonomy for signature operations.
//!
//! Only construction-style operations (`generate_keypair`, `sign`,
//! `parse_public_key`) return these. Predicate-style operations (`verify`,
//! `validate_public_key`) collapse every failure into `false`.

use asymsig_core::CodecError;
use thiserror::Error;

/// Errors that can occur during key generation, signing or key parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// The entropy source could not supply key material.
    #[error("Key generation failed: {0}")]
    KeyGeneration(String),

    /// A key encoding is not valid hex or not a valid DER key structure.
    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(String),

    /// A non-key input (digest or signature) is malformed.
    #[error("Invalid input format: {0}")]
    InvalidInputFormat(String),
}

impl From<CodecError> for SignatureError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::InvalidInputFormat { reason } => Self::InvalidInputFormat(reason),
        }
    }
}

/// Result type for signature operations.
pub type Result<T> = std::result::Result<T, SignatureError>;
