//! Authorship delegation (NIP-26).
//!
//! A delegator signs a token binding a delegatee pubkey to a conditions
//! string; the result travels as the 4-tuple tag
//! `["delegation", delegator, conditions, sig]` attached to the delegatee's
//! events, and any third party holding the tag and the delegatee's pubkey
//! can re-verify it.

use crate::crypto::{PublicKey, SchnorrSignature, Sha256Hash};
use crate::error::{CoreError, KeyError};
use crate::event::Tag;
use crate::keys::Keys;

/// Tag type discriminator for delegation tags.
pub const DELEGATION_TAG_NAME: &str = "delegation";

/// A signed authorship delegation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delegation {
    /// The delegator's public key, 64 lowercase hex characters.
    pub delegator: String,

    /// The conditions string, e.g. `"kind=1&created_at<1700000000"`.
    /// Opaque to this engine; interpreting it is the consumer's concern.
    pub conditions: String,

    /// The delegator's signature over the token digest.
    pub sig: SchnorrSignature,
}

impl Delegation {
    /// Issue a delegation from `keys` (the delegator) to `delegatee_hex`.
    ///
    /// Fails only when `keys` is verify-only.
    pub fn issue(keys: &Keys, delegatee_hex: &str, conditions: &str) -> Result<Self, KeyError> {
        let digest = token_digest(delegatee_hex, conditions);
        let sig = keys.sign_digest(digest.0)?;
        Ok(Self {
            delegator: keys.public_hex(),
            conditions: conditions.to_string(),
            sig,
        })
    }

    /// Verify this delegation against the delegatee's pubkey.
    ///
    /// Pure function, callable by any party. Returns `false` for any
    /// cryptographically invalid tag, never an error.
    pub fn verify(&self, delegatee_hex: &str) -> bool {
        let delegator = match PublicKey::from_hex(&self.delegator) {
            Ok(pk) => pk,
            Err(_) => return false,
        };
        let digest = token_digest(delegatee_hex, &self.conditions);
        delegator.verify_digest(digest.0, &self.sig)
    }

    /// The external 4-tuple tag representation.
    pub fn to_tag(&self) -> Tag {
        Tag::new([
            DELEGATION_TAG_NAME.to_string(),
            self.delegator.clone(),
            self.conditions.clone(),
            self.sig.to_hex(),
        ])
    }

    /// Parse from the external 4-tuple tag representation.
    pub fn from_tag(tag: &Tag) -> Result<Self, CoreError> {
        if tag.name() != Some(DELEGATION_TAG_NAME) {
            return Err(CoreError::MalformedTag(
                "expected a delegation tag".to_string(),
            ));
        }
        if tag.len() != 4 {
            return Err(CoreError::MalformedTag(format!(
                "expected 4 elements, got {}",
                tag.len()
            )));
        }

        let delegator = tag.get(1).unwrap_or_default().to_string();
        let conditions = tag.get(2).unwrap_or_default().to_string();
        let sig = SchnorrSignature::from_hex(tag.get(3).unwrap_or_default())
            .map_err(|e| CoreError::InvalidHex(e.to_string()))?;

        Ok(Self {
            delegator,
            conditions,
            sig,
        })
    }
}

/// Verify a raw delegation tag against the delegatee's pubkey.
///
/// A malformed tag verifies as `false`.
pub fn verify_delegation_tag(delegatee_hex: &str, tag: &Tag) -> bool {
    match Delegation::from_tag(tag) {
        Ok(delegation) => delegation.verify(delegatee_hex),
        Err(_) => false,
    }
}

/// SHA-256 of the delegation token string
/// `nostr:delegation:<delegatee>:<conditions>`.
fn token_digest(delegatee_hex: &str, conditions: &str) -> Sha256Hash {
    let token = format!("nostr:delegation:{}:{}", delegatee_hex, conditions);
    Sha256Hash::hash(token.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_verify_roundtrip() {
        let delegator = Keys::generate();
        let delegatee = Keys::generate();

        let delegation =
            Delegation::issue(&delegator, &delegatee.public_hex(), "kind=1").unwrap();

        assert_eq!(delegation.delegator, delegator.public_hex());
        assert!(delegation.verify(&delegatee.public_hex()));
    }

    #[test]
    fn test_verify_rejects_tampered_conditions() {
        let delegator = Keys::generate();
        let delegatee = Keys::generate();

        let mut delegation =
            Delegation::issue(&delegator, &delegatee.public_hex(), "kind=1").unwrap();
        delegation.conditions = "kind=0".to_string();

        assert!(!delegation.verify(&delegatee.public_hex()));
    }

    #[test]
    fn test_verify_rejects_wrong_delegatee() {
        let delegator = Keys::generate();
        let delegatee = Keys::generate();
        let stranger = Keys::generate();

        let delegation =
            Delegation::issue(&delegator, &delegatee.public_hex(), "kind=1").unwrap();

        assert!(!delegation.verify(&stranger.public_hex()));
    }

    #[test]
    fn test_verify_rejects_tampered_signature() {
        let delegator = Keys::generate();
        let delegatee = Keys::generate();

        let mut delegation =
            Delegation::issue(&delegator, &delegatee.public_hex(), "kind=1").unwrap();
        delegation.sig.0[0] ^= 0x01;

        assert!(!delegation.verify(&delegatee.public_hex()));
    }

    #[test]
    fn test_tag_roundtrip() {
        let delegator = Keys::generate();
        let delegatee = Keys::generate();

        let delegation =
            Delegation::issue(&delegator, &delegatee.public_hex(), "kind=1&kind=7").unwrap();
        let tag = delegation.to_tag();

        assert_eq!(tag.name(), Some("delegation"));
        assert_eq!(tag.len(), 4);

        let recovered = Delegation::from_tag(&tag).unwrap();
        assert_eq!(recovered, delegation);
        assert!(verify_delegation_tag(&delegatee.public_hex(), &tag));
    }

    #[test]
    fn test_from_tag_rejects_wrong_shape() {
        assert!(Delegation::from_tag(&Tag::new(["p", "ab"])).is_err());
        assert!(Delegation::from_tag(&Tag::new(["delegation", "ab", "kind=1"])).is_err());
        assert!(
            Delegation::from_tag(&Tag::new(["delegation", "ab", "kind=1", "not-hex"])).is_err()
        );
    }

    #[test]
    fn test_malformed_tag_verifies_false() {
        let delegatee = Keys::generate();
        assert!(!verify_delegation_tag(
            &delegatee.public_hex(),
            &Tag::new(["delegation", "xy"])
        ));
    }

    #[test]
    fn test_issue_requires_secret_key() {
        let delegator = Keys::generate();
        let verify_only = Keys::from_public_hex(&delegator.public_hex()).unwrap();
        let delegatee = Keys::generate();

        assert!(matches!(
            Delegation::issue(&verify_only, &delegatee.public_hex(), "kind=1"),
            Err(KeyError::MissingSecretKey)
        ));
    }
}
