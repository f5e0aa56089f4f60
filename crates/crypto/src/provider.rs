//! Asymmetric signature capability and its Ed25519 provider.
//!
//! The capability splits its operations into two error policies:
//!
//! - **Constructors** (`generate_keypair`, `sign`, `parse_public_key`) report
//!   why they failed through [`SignatureError`].
//! - **Predicates** (`verify`, `validate_public_key`) answer yes or no and
//!   nothing else. Malformed input and a cryptographically invalid signature
//!   are indistinguishable to the caller, so the result cannot be used as an
//!   oracle on key or signature structure.
//!
//! # Security Model
//!
//! - The message digest is signed exactly as given; no hashing happens here.
//! - Private keys are decoded per call and zeroized when the call returns.
//! - The provider holds no key material and no mutable state.

use crate::entropy::{EntropySource, OsEntropy};
use crate::error::{Result, SignatureError};
use crate::keys::{signing_key_from_hex, KeyPair, PublicKey, Signature, SEED_LENGTH};
use asymsig_core::{hex_codec, Config, SignatureConfig, VerificationPolicy};
use ed25519_dalek::{Signer, Verifier};
use std::fmt;
use tracing::{debug, instrument};
use zeroize::Zeroizing;

/// Describes the signature algorithm behind a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureScheme {
    pub name: &'static str,
    pub public_key_len: usize,
    pub signature_len: usize,
    /// False when the message digest is signed literally, without hashing.
    pub prehashed: bool,
}

/// Pure Ed25519 over caller-supplied bytes.
pub const ED25519: SignatureScheme = SignatureScheme {
    name: "Ed25519",
    public_key_len: crate::keys::PUBLIC_KEY_LENGTH,
    signature_len: crate::keys::SIGNATURE_LENGTH,
    prehashed: false,
};

/// A normalized asymmetric-signature capability.
///
/// All inputs are hex strings. Implementations are stateless per call and must
/// be shareable across threads.
pub trait AsymmetricSigner: Send + Sync {
    /// The algorithm this signer implements.
    fn scheme(&self) -> SignatureScheme;

    /// Generate a fresh key pair from a secure random source.
    fn generate_keypair(&self) -> Result<KeyPair>;

    /// Sign the bytes encoded by `message_digest` with a PKCS#8 private key.
    fn sign(&self, private_key: &str, message_digest: &str) -> Result<Signature>;

    /// True iff `signature` is valid for `message_digest` under the X.509
    /// `public_key`. Never fails.
    fn verify(&self, public_key: &str, signature: &str, message_digest: &str) -> bool;

    /// True iff `encoded` decodes to a structurally valid public key.
    fn validate_public_key(&self, encoded: &str) -> bool;

    /// Decode an X.509 public key.
    fn parse_public_key(&self, encoded: &str) -> Result<PublicKey>;
}

/// Why a verification was rejected. Internal only.
#[derive(Debug)]
enum Rejection {
    PublicKey(SignatureError),
    Signature(SignatureError),
    Digest(SignatureError),
    Invalid(ed25519_dalek::SignatureError),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::PublicKey(e) => write!(f, "malformed public key: {}", e),
            Rejection::Signature(e) => write!(f, "malformed signature: {}", e),
            Rejection::Digest(e) => write!(f, "malformed digest: {}", e),
            Rejection::Invalid(e) => write!(f, "signature does not verify: {}", e),
        }
    }
}

/// Ed25519 implementation of [`AsymmetricSigner`].
///
/// Construct once at startup and share it (for example behind an `Arc`).
///
/// # Examples
/// ```
/// use asymsig_crypto::{AsymmetricSigner, Ed25519Provider};
///
/// let provider = Ed25519Provider::default();
/// let keypair = provider.generate_keypair().unwrap();
/// let private_key = keypair.private_key_hex().unwrap();
/// let public_key = keypair.public_key_hex();
///
/// let signature = provider.sign(&private_key, "deadbeef").unwrap();
/// assert!(provider.verify(&public_key, &signature.to_hex(), "deadbeef"));
/// assert!(!provider.verify(&public_key, &signature.to_hex(), "deadbeee"));
/// ```
#[derive(Debug, Clone)]
pub struct Ed25519Provider<E = OsEntropy> {
    config: SignatureConfig,
    entropy: E,
}

impl Ed25519Provider<OsEntropy> {
    /// Creates a provider backed by the operating system's CSPRNG.
    pub fn new(config: SignatureConfig) -> Self {
        Self::with_entropy(config, OsEntropy)
    }

    /// Creates a provider from the `[signature]` section of a [`Config`].
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.signature.clone())
    }
}

impl Default for Ed25519Provider<OsEntropy> {
    fn default() -> Self {
        Self::new(SignatureConfig::default())
    }
}

impl<E: EntropySource> Ed25519Provider<E> {
    /// Creates a provider with an explicit entropy source.
    pub fn with_entropy(config: SignatureConfig, entropy: E) -> Self {
        Self { config, entropy }
    }

    pub fn config(&self) -> &SignatureConfig {
        &self.config
    }

    fn check_signature(
        &self,
        public_key: &str,
        signature: &str,
        message_digest: &str,
    ) -> std::result::Result<(), Rejection> {
        let key = PublicKey::from_hex(public_key).map_err(Rejection::PublicKey)?;
        let signature = Signature::from_hex(signature).map_err(Rejection::Signature)?;
        let digest = hex_codec::decode(message_digest)
            .map_err(|e| Rejection::Digest(SignatureError::from(e)))?;

        let signature = ed25519_dalek::Signature::from_bytes(&signature.to_bytes());
        let verifying_key = key.verifying_key();
        let outcome = match self.config.verification {
            VerificationPolicy::Standard => verifying_key.verify(&digest, &signature),
            VerificationPolicy::Strict => verifying_key.verify_strict(&digest, &signature),
        };
        outcome.map_err(Rejection::Invalid)
    }
}

impl<E: EntropySource> AsymmetricSigner for Ed25519Provider<E> {
    fn scheme(&self) -> SignatureScheme {
        ED25519
    }

    #[instrument(level = "debug", skip(self))]
    fn generate_keypair(&self) -> Result<KeyPair> {
        let mut seed = Zeroizing::new([0u8; SEED_LENGTH]);
        self.entropy.fill(&mut seed[..])?;

        let keypair = KeyPair::from_seed(&seed);
        debug!(key_id = %keypair.public_key().key_id(), "generated Ed25519 key pair");
        Ok(keypair)
    }

    #[instrument(level = "debug", skip_all)]
    fn sign(&self, private_key: &str, message_digest: &str) -> Result<Signature> {
        let signing_key = signing_key_from_hex(private_key)?;
        let digest = hex_codec::decode(message_digest)?;
        Ok(Signature::from(signing_key.sign(&digest)))
    }

    #[instrument(level = "debug", skip_all)]
    fn verify(&self, public_key: &str, signature: &str, message_digest: &str) -> bool {
        match self.check_signature(public_key, signature, message_digest) {
            Ok(()) => true,
            Err(rejection) => {
                if self.config.diagnostics {
                    debug!(reason = %rejection, "signature rejected");
                }
                false
            }
        }
    }

    fn validate_public_key(&self, encoded: &str) -> bool {
        PublicKey::from_hex(encoded).is_ok()
    }

    fn parse_public_key(&self, encoded: &str) -> Result<PublicKey> {
        PublicKey::from_hex(encoded)
    }
}
