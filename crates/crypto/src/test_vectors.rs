//! RFC 8032 §7.1 test vectors driven through the hex/DER surface.
//!
//! Each vector's raw seed and public key are wrapped in the fixed PKCS#8 and
//! SubjectPublicKeyInfo prefixes, so these tests also pin the key encodings
//! byte-for-byte.

use crate::provider::{AsymmetricSigner, Ed25519Provider};

/// PKCS#8 v1 prefix for an Ed25519 seed.
const PKCS8_PREFIX: &str = "302e020100300506032b657004220420";

/// SubjectPublicKeyInfo prefix for an Ed25519 public key.
const SPKI_PREFIX: &str = "302a300506032b6570032100";

struct SigningTestVector {
    name: &'static str,
    seed: &'static str,
    public_key: &'static str,
    message: &'static str,
    signature: &'static str,
}

/// ⚠️ These keys are publicly known. Test use only.
const VECTORS: &[SigningTestVector] = &[
    SigningTestVector {
        name: "rfc8032_test_1",
        seed: "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60",
        public_key: "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a",
        message: "",
        signature: "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e065224901555fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b",
    },
    SigningTestVector {
        name: "rfc8032_test_2",
        seed: "4ccd089b28ff96da9db6c346ec114e0f5b8a319f35aba624da8cf6ed4fb8a6fb",
        public_key: "3d4017c3e843895a92b70aa74d1b7ebc9c982ccf2ec4968cc0cd55f12af4660c",
        message: "72",
        signature: "92a009a9f0d4cab8720e820b5f642540a2b27b5416503f8fb3762223ebdb69da085ac1e43e15996e458f3613d0f11d8c387b2eaeb4302aeeb00d291612bb0c00",
    },
];

#[test]
fn test_vectors_sign() {
    let provider = Ed25519Provider::default();
    for vector in VECTORS {
        let private_key = format!("{}{}", PKCS8_PREFIX, vector.seed);
        let signature = provider.sign(&private_key, vector.message).unwrap();
        assert_eq!(signature.to_hex(), vector.signature, "{}", vector.name);
    }
}

#[test]
fn test_vectors_verify() {
    let provider = Ed25519Provider::default();
    for vector in VECTORS {
        let public_key = format!("{}{}", SPKI_PREFIX, vector.public_key);
        assert!(
            provider.verify(&public_key, vector.signature, vector.message),
            "{}",
            vector.name
        );
    }
}

#[test]
fn test_vectors_public_key_encoding() {
    let provider = Ed25519Provider::default();
    for vector in VECTORS {
        let encoded = format!("{}{}", SPKI_PREFIX, vector.public_key);
        let parsed = provider.parse_public_key(&encoded).unwrap();
        assert_eq!(parsed.to_hex(), encoded, "{}", vector.name);
    }
}

#[test]
fn test_vectors_wrong_message_rejected() {
    let provider = Ed25519Provider::default();
    let vector = &VECTORS[1];
    let public_key = format!("{}{}", SPKI_PREFIX, vector.public_key);
    assert!(!provider.verify(&public_key, vector.signature, "73"));
}
