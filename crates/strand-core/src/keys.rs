//! Signing identity: an x-only public key with an optional secret key.
//!
//! An identity built from a secret key derives its public key; one built
//! from a public key alone is verify-only and cannot sign. When both are
//! supplied the public key must equal the derivation of the secret.

use secp256k1::{Keypair, Message, Secp256k1, SecretKey, XOnlyPublicKey};
use std::fmt;

use crate::crypto::{is_lower_hex, PublicKey, SchnorrSignature};
use crate::error::KeyError;

/// A signing identity.
#[derive(Clone)]
pub struct Keys {
    secret: Option<SecretKey>,
    public: PublicKey,
}

impl Keys {
    /// Generate a new random identity.
    pub fn generate() -> Self {
        let secp = Secp256k1::new();
        let keypair = Keypair::new(&secp, &mut rand::thread_rng());
        let (xonly, _parity) = XOnlyPublicKey::from_keypair(&keypair);
        Self {
            secret: Some(keypair.secret_key()),
            public: PublicKey(xonly.serialize()),
        }
    }

    /// Build from a 32-byte secret scalar.
    pub fn from_seed(seed: &[u8; 32]) -> Result<Self, KeyError> {
        let secret = SecretKey::from_slice(seed).map_err(|_| KeyError::InvalidSecretKey)?;
        Ok(Self {
            public: derive_public(&secret),
            secret: Some(secret),
        })
    }

    /// Build a signing identity from a secret key in hex.
    pub fn from_secret_hex(s: &str) -> Result<Self, KeyError> {
        if !is_lower_hex(s, 64) {
            return Err(KeyError::InvalidSecretKey);
        }
        let bytes = hex::decode(s).map_err(|_| KeyError::InvalidSecretKey)?;
        let mut seed = [0u8; 32];
        seed.copy_from_slice(&bytes);
        Self::from_seed(&seed)
    }

    /// Build a verify-only identity from a public key in hex.
    pub fn from_public_hex(s: &str) -> Result<Self, KeyError> {
        let public = PublicKey::from_hex(s)?;
        // Must encode a valid x-only point, not just 32 bytes of hex.
        XOnlyPublicKey::from_slice(&public.0).map_err(|_| KeyError::InvalidPublicKey)?;
        Ok(Self {
            secret: None,
            public,
        })
    }

    /// Build from whichever key material is available.
    ///
    /// With a secret key the public key is derived; if a public key is also
    /// supplied it must match the derivation. With only a public key the
    /// identity is verify-only. With neither, `KeyError::Missing`.
    pub fn from_hex(secret: Option<&str>, public: Option<&str>) -> Result<Self, KeyError> {
        match (secret, public) {
            (Some(secret), public) => {
                let keys = Self::from_secret_hex(secret)?;
                if let Some(public) = public {
                    if keys.public_hex() != public {
                        return Err(KeyError::Mismatch);
                    }
                }
                Ok(keys)
            }
            (None, Some(public)) => Self::from_public_hex(public),
            (None, None) => Err(KeyError::Missing),
        }
    }

    /// The public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// The public key as 64 lowercase hex characters.
    pub fn public_hex(&self) -> String {
        self.public.to_hex()
    }

    /// The secret key as 64 lowercase hex characters, if present.
    pub fn secret_hex(&self) -> Option<String> {
        self.secret
            .as_ref()
            .map(|sk| hex::encode(sk.secret_bytes()))
    }

    /// Whether this identity can sign.
    pub fn can_sign(&self) -> bool {
        self.secret.is_some()
    }

    /// Sign a 32-byte digest with BIP-340 Schnorr.
    ///
    /// Fails with `KeyError::MissingSecretKey` on a verify-only identity.
    pub fn sign_digest(&self, digest: [u8; 32]) -> Result<SchnorrSignature, KeyError> {
        let secret = self.secret.as_ref().ok_or(KeyError::MissingSecretKey)?;
        let secp = Secp256k1::new();
        let keypair = Keypair::from_secret_key(&secp, secret);
        let sig = secp.sign_schnorr(&Message::from_digest(digest), &keypair);

        let mut bytes = [0u8; 64];
        bytes.copy_from_slice(sig.as_ref());
        Ok(SchnorrSignature(bytes))
    }
}

impl fmt::Debug for Keys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never prints secret material.
        f.debug_struct("Keys")
            .field("public", &self.public)
            .field("can_sign", &self.can_sign())
            .finish()
    }
}

fn derive_public(secret: &SecretKey) -> PublicKey {
    let secp = Secp256k1::new();
    let keypair = Keypair::from_secret_key(&secp, secret);
    let (xonly, _parity) = XOnlyPublicKey::from_keypair(&keypair);
    PublicKey(xonly.serialize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_can_sign() {
        let keys = Keys::generate();
        assert!(keys.can_sign());
        assert_eq!(keys.public_hex().len(), 64);
    }

    #[test]
    fn test_deterministic_from_seed() {
        let k1 = Keys::from_seed(&[0x42; 32]).unwrap();
        let k2 = Keys::from_seed(&[0x42; 32]).unwrap();
        assert_eq!(k1.public_hex(), k2.public_hex());
    }

    #[test]
    fn test_secret_hex_roundtrip() {
        let keys = Keys::generate();
        let secret = keys.secret_hex().unwrap();
        let recovered = Keys::from_secret_hex(&secret).unwrap();
        assert_eq!(recovered.public_hex(), keys.public_hex());
    }

    #[test]
    fn test_verify_only_cannot_sign() {
        let keys = Keys::generate();
        let verify_only = Keys::from_public_hex(&keys.public_hex()).unwrap();
        assert!(!verify_only.can_sign());
        assert!(matches!(
            verify_only.sign_digest([0u8; 32]),
            Err(KeyError::MissingSecretKey)
        ));
    }

    #[test]
    fn test_from_hex_requires_some_key() {
        assert!(matches!(Keys::from_hex(None, None), Err(KeyError::Missing)));
    }

    #[test]
    fn test_from_hex_checks_derivation() {
        let keys = Keys::generate();
        let other = Keys::generate();
        let secret = keys.secret_hex().unwrap();

        assert!(Keys::from_hex(Some(&secret), Some(&keys.public_hex())).is_ok());
        assert!(matches!(
            Keys::from_hex(Some(&secret), Some(&other.public_hex())),
            Err(KeyError::Mismatch)
        ));
    }

    #[test]
    fn test_rejects_zero_secret() {
        assert!(matches!(
            Keys::from_seed(&[0u8; 32]),
            Err(KeyError::InvalidSecretKey)
        ));
    }

    #[test]
    fn test_sign_verify_digest() {
        let keys = Keys::generate();
        let digest = [0x5a; 32];
        let sig = keys.sign_digest(digest).unwrap();

        assert!(keys.public_key().verify_digest(digest, &sig));
        assert!(!keys.public_key().verify_digest([0x5b; 32], &sig));

        let other = Keys::generate();
        assert!(!other.public_key().verify_digest(digest, &sig));
    }
}
