//! Cryptographic primitives: SHA-256 hashing and BIP-340 Schnorr types.
//!
//! The signature scheme itself is an opaque collaborator (the `secp256k1`
//! crate); this module wraps its inputs and outputs in strong types whose
//! external form is the protocol's lowercase hex.

use secp256k1::schnorr;
use secp256k1::{Message, Secp256k1, XOnlyPublicKey};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;

use crate::error::KeyError;

/// A 32-byte SHA-256 hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sha256Hash(pub [u8; 32]);

impl Sha256Hash {
    /// Compute the SHA-256 hash of the given data.
    pub fn hash(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        Self(hasher.finalize().into())
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Sha256Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sha256({})", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for Sha256Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// A 32-byte x-only secp256k1 public key.
///
/// The external representation is 64 lowercase hex characters.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey(pub [u8; 32]);

impl PublicKey {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string (lowercase).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from 64 lowercase hex characters.
    pub fn from_hex(s: &str) -> Result<Self, KeyError> {
        if !is_lower_hex(s, 64) {
            return Err(KeyError::InvalidPublicKey);
        }
        let bytes = hex::decode(s).map_err(|_| KeyError::InvalidPublicKey)?;
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// Verify a BIP-340 signature over a 32-byte digest.
    ///
    /// Returns `false` for any cryptographically invalid input, including
    /// bytes that do not encode a curve point. Never lenient, never panics.
    pub fn verify_digest(&self, digest: [u8; 32], signature: &SchnorrSignature) -> bool {
        let key = match XOnlyPublicKey::from_slice(&self.0) {
            Ok(key) => key,
            Err(_) => return false,
        };
        let sig = match schnorr::Signature::from_slice(&signature.0) {
            Ok(sig) => sig,
            Err(_) => return false,
        };

        let secp = Secp256k1::verification_only();
        secp.verify_schnorr(&sig, &Message::from_digest(digest), &key)
            .is_ok()
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for PublicKey {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// A 64-byte BIP-340 Schnorr signature.
///
/// The external representation is 128 lowercase hex characters.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SchnorrSignature(pub [u8; 64]);

impl SchnorrSignature {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    /// Convert to hex string (lowercase).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from 128 lowercase hex characters.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != 64 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 64];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for SchnorrSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SchnorrSig({}...)", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for SchnorrSignature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 64]> for SchnorrSignature {
    fn from(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }
}

impl Serialize for SchnorrSignature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for SchnorrSignature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Check that `s` is exactly `len` lowercase hex characters.
pub(crate) fn is_lower_hex(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_deterministic() {
        let h1 = Sha256Hash::hash(b"test data");
        let h2 = Sha256Hash::hash(b"test data");
        assert_eq!(h1, h2);

        let h3 = Sha256Hash::hash(b"different data");
        assert_ne!(h1, h3);
    }

    #[test]
    fn test_public_key_hex_roundtrip() {
        let pk = PublicKey::from_bytes([0x42; 32]);
        let hex = pk.to_hex();
        let recovered = PublicKey::from_hex(&hex).unwrap();
        assert_eq!(pk, recovered);
    }

    #[test]
    fn test_public_key_rejects_uppercase_hex() {
        let s = "42".repeat(31) + "4F";
        assert!(matches!(
            PublicKey::from_hex(&s),
            Err(KeyError::InvalidPublicKey)
        ));
    }

    #[test]
    fn test_public_key_rejects_short_hex() {
        assert!(PublicKey::from_hex(&"ab".repeat(31)).is_err());
    }

    #[test]
    fn test_signature_hex_roundtrip() {
        let sig = SchnorrSignature::from_bytes([0xab; 64]);
        let recovered = SchnorrSignature::from_hex(&sig.to_hex()).unwrap();
        assert_eq!(sig, recovered);
    }

    #[test]
    fn test_signature_json_form_is_hex_string() {
        let sig = SchnorrSignature::from_bytes([0x01; 64]);
        let json = serde_json::to_string(&sig).unwrap();
        assert_eq!(json, format!("\"{}\"", "01".repeat(64)));
    }

    #[test]
    fn test_is_lower_hex() {
        assert!(is_lower_hex("0af9", 4));
        assert!(!is_lower_hex("0AF9", 4));
        assert!(!is_lower_hex("0af", 4));
        assert!(!is_lower_hex("0afg", 4));
    }
}
