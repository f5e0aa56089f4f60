//! Hex codec for all key, digest and signature material.
//!
//! Encoded values are even-length strings over `[0-9a-fA-F]`. Encoding always
//! produces lowercase; decoding accepts either case.

use crate::error::{CodecError, Result};

/// Encode bytes as a lowercase hex string.
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(bytes)
}

/// Decode a hex string into bytes.
///
/// # Errors
/// Returns `CodecError::InvalidInputFormat` on odd length or a non-hex digit.
pub fn decode(encoded: &str) -> Result<Vec<u8>> {
    hex::decode(encoded).map_err(|e| CodecError::InvalidInputFormat {
        reason: match e {
            hex::FromHexError::OddLength => format!("odd length ({})", encoded.len()),
            hex::FromHexError::InvalidHexCharacter { c, index } => {
                format!("invalid hex character {:?} at index {}", c, index)
            }
            other => other.to_string(),
        },
    })
}

/// Returns true if `encoded` satisfies the hex string invariant.
pub fn is_hex(encoded: &str) -> bool {
    encoded.len() % 2 == 0 && encoded.bytes().all(|b| b.is_ascii_hexdigit())
}
