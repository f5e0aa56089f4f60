//! Entropy sources for key generation.

use crate::error::{Result, SignatureError};

/// A cryptographically secure source of random bytes.
///
/// Implementations must be safe to call concurrently; the provider holds one
/// instance and shares it across all callers.
pub trait EntropySource: Send + Sync {
    /// Fill `dest` entirely with random bytes.
    fn fill(&self, dest: &mut [u8]) -> Result<()>;
}

/// The operating system's CSPRNG via `getrandom`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        getrandom::getrandom(dest).map_err(|e| {
            tracing::warn!(error = %e, "OS entropy source unavailable");
            SignatureError::KeyGeneration(format!("entropy source unavailable: {}", e))
        })
    }
}
