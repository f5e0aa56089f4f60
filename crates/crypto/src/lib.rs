//! Ed25519 signature capability for the asymsig stack.
//!
//! This crate adapts a vetted Ed25519 implementation to a normalized
//! asymmetric-signature interface where every key, digest and signature is a
//! hex string:
//!
//! - **Public keys**: X.509 SubjectPublicKeyInfo DER
//! - **Private keys**: PKCS#8 DER (RFC 8410)
//! - **Signatures**: 64 raw bytes
//!
//! # Security Principles
//!
//! - Never roll custom cryptographic primitives
//! - Digests are signed exactly as supplied; hashing is the caller's concern
//! - Secrets are never logged and are zeroized after use
//! - Verification fails closed to `false` without revealing why

pub mod entropy;
pub mod error;
pub mod keys;
pub mod provider;

#[cfg(test)]
mod test_vectors;

pub use entropy::{EntropySource, OsEntropy};
pub use error::{Result, SignatureError};
pub use keys::{KeyPair, PublicKey, Signature, PUBLIC_KEY_LENGTH, SEED_LENGTH, SIGNATURE_LENGTH};
pub use provider::{AsymmetricSigner, Ed25519Provider, SignatureScheme, ED25519};
