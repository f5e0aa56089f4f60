//! Ed25519 key and signature types.
//!
//! Public keys travel as hex-encoded X.509 SubjectPublicKeyInfo DER, private
//! keys as hex-encoded PKCS#8 DER, signatures as 64 raw bytes in hex.

use crate::error::{Result, SignatureError};
use asymsig_core::hex_codec;
use ed25519_dalek::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, KeypairBytes};
use ed25519_dalek::{SigningKey, VerifyingKey};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use zeroize::Zeroizing;

/// Length of a raw Ed25519 public key.
pub const PUBLIC_KEY_LENGTH: usize = ed25519_dalek::PUBLIC_KEY_LENGTH;

/// Length of an Ed25519 private key seed.
pub const SEED_LENGTH: usize = ed25519_dalek::SECRET_KEY_LENGTH;

/// Length of an Ed25519 signature.
pub const SIGNATURE_LENGTH: usize = ed25519_dalek::SIGNATURE_LENGTH;

/// SubjectPublicKeyInfo header for id-Ed25519 (RFC 8410); the raw key follows.
const SPKI_ED25519_PREFIX: [u8; 12] = [
    0x30, 0x2a, 0x30, 0x05, 0x06, 0x03, 0x2b, 0x65, 0x70, 0x03, 0x21, 0x00,
];

/// A freshly generated Ed25519 key pair.
///
/// The caller owns the private key exclusively. The signing key is zeroized
/// on drop and every export is wrapped in [`Zeroizing`].
pub struct KeyPair {
    signing_key: SigningKey,
}

impl KeyPair {
    pub(crate) fn from_seed(seed: &[u8; SEED_LENGTH]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// The public half of this key pair.
    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            inner: self.signing_key.verifying_key(),
        }
    }

    /// Hex-encoded SubjectPublicKeyInfo DER, as accepted by `verify`.
    pub fn public_key_hex(&self) -> String {
        self.public_key().to_hex()
    }

    /// Raw 32-byte private key seed.
    pub fn to_seed_bytes(&self) -> Zeroizing<[u8; SEED_LENGTH]> {
        Zeroizing::new(self.signing_key.to_bytes())
    }

    /// PKCS#8 v1 (RFC 8410) DER wrapping the seed.
    ///
    /// The public key is omitted, producing the 48-byte form other Ed25519
    /// providers emit. The intermediate `KeypairBytes` wipes its seed on drop.
    pub fn private_key_der(&self) -> Result<Zeroizing<Vec<u8>>> {
        let keypair_bytes = KeypairBytes {
            secret_key: self.signing_key.to_bytes(),
            public_key: None,
        };
        let document = keypair_bytes.to_pkcs8_der().map_err(|e| {
            SignatureError::InvalidKeyFormat(format!("PKCS#8 encoding failed: {}", e))
        })?;
        Ok(Zeroizing::new(document.as_bytes().to_vec()))
    }

    /// Hex-encoded PKCS#8 DER, as accepted by `sign`.
    pub fn private_key_hex(&self) -> Result<Zeroizing<String>> {
        let der = self.private_key_der()?;
        Ok(Zeroizing::new(hex_codec::encode(der.as_slice())))
    }
}

// Explicitly no Debug output of secret material.
impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key())
            .finish_non_exhaustive()
    }
}

/// Decode a hex-encoded PKCS#8 private key.
pub(crate) fn signing_key_from_hex(encoded: &str) -> Result<SigningKey> {
    // The decoded DER holds the seed in the clear.
    let der = Zeroizing::new(hex_codec::decode(encoded).map_err(|_| {
        SignatureError::InvalidKeyFormat("private key is not valid hex".to_string())
    })?);
    SigningKey::from_pkcs8_der(&der).map_err(|e| {
        SignatureError::InvalidKeyFormat(format!("not a PKCS#8 Ed25519 private key: {}", e))
    })
}

/// A structurally valid Ed25519 public key.
///
/// Parsing guarantees correct length and a decompressible curve point. It does
/// not imply the key was ever generated by this component.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey {
    inner: VerifyingKey,
}

impl PublicKey {
    /// Parse SubjectPublicKeyInfo DER.
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let inner = VerifyingKey::from_public_key_der(der).map_err(|e| {
            SignatureError::InvalidKeyFormat(format!("not an X.509 Ed25519 public key: {}", e))
        })?;
        Ok(Self { inner })
    }

    /// Parse hex-encoded SubjectPublicKeyInfo DER.
    pub fn from_hex(encoded: &str) -> Result<Self> {
        let der = hex_codec::decode(encoded).map_err(|e| {
            SignatureError::InvalidKeyFormat(format!("public key is not valid hex: {}", e))
        })?;
        Self::from_der(&der)
    }

    /// Raw 32-byte compressed point.
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        self.inner.as_bytes()
    }

    /// SubjectPublicKeyInfo DER encoding.
    pub fn to_der(&self) -> Vec<u8> {
        let mut der = Vec::with_capacity(SPKI_ED25519_PREFIX.len() + PUBLIC_KEY_LENGTH);
        der.extend_from_slice(&SPKI_ED25519_PREFIX);
        der.extend_from_slice(self.inner.as_bytes());
        der
    }

    /// Hex-encoded SubjectPublicKeyInfo DER.
    pub fn to_hex(&self) -> String {
        hex_codec::encode(self.to_der())
    }

    /// Stable short identifier: hex of the first 16 bytes of BLAKE3 over the raw key.
    pub fn key_id(&self) -> String {
        let hash = blake3::hash(self.inner.as_bytes());
        hex_codec::encode(&hash.as_bytes()[..16])
    }

    pub(crate) fn verifying_key(&self) -> &VerifyingKey {
        &self.inner
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.key_id())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for PublicKey {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        Self::from_hex(&encoded).map_err(serde::de::Error::custom)
    }
}

/// A 64-byte Ed25519 signature.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature([u8; SIGNATURE_LENGTH]);

impl Signature {
    /// Wrap raw signature bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; SIGNATURE_LENGTH] = bytes.try_into().map_err(|_| {
            SignatureError::InvalidInputFormat(format!(
                "signature must be {} bytes, got {}",
                SIGNATURE_LENGTH,
                bytes.len()
            ))
        })?;
        Ok(Self(bytes))
    }

    /// Parse a hex-encoded signature.
    pub fn from_hex(encoded: &str) -> Result<Self> {
        Self::from_bytes(&hex_codec::decode(encoded)?)
    }

    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        self.0
    }

    pub fn to_hex(&self) -> String {
        hex_codec::encode(self.0)
    }
}

impl From<ed25519_dalek::Signature> for Signature {
    fn from(signature: ed25519_dalek::Signature) -> Self {
        Self(signature.to_bytes())
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({}...)", hex_codec::encode(&self.0[..4]))
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Signature {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        Self::from_hex(&encoded).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPKI_PREFIX: &str = "302a300506032b6570032100";
    const PKCS8_V1_PREFIX: &str = "302e020100300506032b657004220420";

    fn fixed_keypair() -> KeyPair {
        KeyPair::from_seed(&[7u8; SEED_LENGTH])
    }

    #[test]
    fn test_public_key_hex_is_spki() {
        let keypair = fixed_keypair();
        let encoded = keypair.public_key_hex();

        assert_eq!(encoded.len(), 2 * (12 + PUBLIC_KEY_LENGTH));
        assert!(encoded.starts_with(SPKI_PREFIX));
        assert!(encoded.ends_with(&hex_codec::encode(keypair.public_key().as_bytes())));
    }

    #[test]
    fn test_private_key_hex_is_pkcs8_v1() {
        let keypair = fixed_keypair();
        let encoded = keypair.private_key_hex().unwrap();

        assert_eq!(encoded.len(), 2 * (16 + SEED_LENGTH));
        assert!(encoded.starts_with(PKCS8_V1_PREFIX));
        assert!(encoded.ends_with(&hex_codec::encode([7u8; SEED_LENGTH])));
    }

    #[test]
    fn test_private_key_hex_decodes_to_same_key() {
        let keypair = fixed_keypair();
        let restored = signing_key_from_hex(&keypair.private_key_hex().unwrap()).unwrap();
        assert_eq!(restored.to_bytes(), *keypair.to_seed_bytes());
    }

    #[test]
    fn test_pkcs8_v2_with_public_key_accepted() {
        let keypair = fixed_keypair();
        let v2 = keypair.signing_key.to_pkcs8_der().unwrap();
        let restored = signing_key_from_hex(&hex_codec::encode(v2.as_bytes())).unwrap();
        assert_eq!(restored.verifying_key(), *keypair.public_key().verifying_key());
    }

    #[test]
    fn test_signing_key_from_hex_rejects_raw_seed() {
        let err = signing_key_from_hex(&hex_codec::encode([7u8; SEED_LENGTH])).unwrap_err();
        assert!(matches!(err, SignatureError::InvalidKeyFormat(_)));
    }

    #[test]
    fn test_signing_key_error_does_not_echo_input() {
        let err = signing_key_from_hex("secretzz").unwrap_err();
        assert!(!err.to_string().contains("secret"));
    }

    #[test]
    fn test_public_key_roundtrip_through_hex() {
        let public_key = fixed_keypair().public_key();
        let parsed: PublicKey = public_key.to_hex().parse().unwrap();
        assert_eq!(parsed, public_key);
        assert_eq!(parsed.to_string(), public_key.to_hex());
    }

    #[test]
    fn test_public_key_rejects_raw_bytes() {
        let raw = hex_codec::encode(fixed_keypair().public_key().as_bytes());
        assert!(matches!(
            PublicKey::from_hex(&raw),
            Err(SignatureError::InvalidKeyFormat(_))
        ));
    }

    #[test]
    fn test_key_id_is_stable() {
        let a = fixed_keypair().public_key();
        let b = fixed_keypair().public_key();
        assert_eq!(a.key_id(), b.key_id());
        assert_eq!(a.key_id().len(), 32);
        assert_ne!(a.key_id(), KeyPair::from_seed(&[8u8; 32]).public_key().key_id());
    }

    #[test]
    fn test_keypair_debug_hides_secret() {
        let keypair = fixed_keypair();
        let debug = format!("{:?}", keypair);
        let seed_hex = hex_codec::encode([7u8; SEED_LENGTH]);
        assert!(debug.contains("KeyPair"));
        assert!(!debug.contains(&seed_hex));
    }

    #[test]
    fn test_public_key_der_matches_spki_encoder() {
        use ed25519_dalek::pkcs8::EncodePublicKey;

        let public_key = fixed_keypair().public_key();
        let document = public_key.verifying_key().to_public_key_der().unwrap();
        assert_eq!(public_key.to_der(), document.as_bytes());
        assert_eq!(PublicKey::from_der(&public_key.to_der()).unwrap(), public_key);
    }

    #[test]
    fn test_keypair_bytes_seed_wiped_on_drop() {
        use std::mem::MaybeUninit;

        let mut slot = MaybeUninit::new(KeypairBytes {
            secret_key: [7u8; SEED_LENGTH],
            public_key: None,
        });
        // SAFETY: the slot is initialised, dropped exactly once, and its
        // storage outlives the read of the plain byte array below.
        let secret = unsafe {
            std::ptr::drop_in_place(slot.as_mut_ptr());
            std::ptr::addr_of!((*slot.as_ptr()).secret_key).read()
        };
        assert_eq!(secret, [0u8; SEED_LENGTH]);
    }

    #[test]
    fn test_signature_length_enforced() {
        assert!(Signature::from_bytes(&[0u8; 63]).is_err());
        assert!(Signature::from_bytes(&[0u8; 65]).is_err());
        assert!(Signature::from_bytes(&[0u8; 64]).is_ok());
    }

    #[test]
    fn test_signature_length_error_reports_length() {
        let err = Signature::from_hex(&"00".repeat(63)).unwrap_err();
        assert_eq!(
            err,
            SignatureError::InvalidInputFormat("signature must be 64 bytes, got 63".to_string())
        );
    }

    #[test]
    fn test_signature_serde_as_hex_string() {
        let signature = Signature([0xab; SIGNATURE_LENGTH]);
        let json = serde_json::to_string(&signature).unwrap();
        assert_eq!(json, format!("\"{}\"", "ab".repeat(SIGNATURE_LENGTH)));
        let back: Signature = serde_json::from_str(&json).unwrap();
        assert_eq!(back, signature);
    }

    #[test]
    fn test_public_key_deserialize_rejects_garbage() {
        let result: std::result::Result<PublicKey, _> = serde_json::from_str("\"00ff\"");
        assert!(result.is_err());
    }
}
