//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use strand_core::{Event, EventDraft, Keys};
use strand_engine::{kinds, EventEngine};

/// A test fixture with a signing identity.
pub struct TestFixture {
    pub keys: Keys,
}

impl TestFixture {
    /// Create a new test fixture with a random identity.
    pub fn new() -> Self {
        Self {
            keys: Keys::generate(),
        }
    }

    /// Create with a deterministic identity from seed.
    ///
    /// The seed must be a valid secp256k1 secret scalar; in particular the
    /// all-zero seed is rejected.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        Self {
            keys: Keys::from_seed(&seed).expect("seed is not a valid secret key"),
        }
    }

    /// The identity's public key as hex.
    pub fn public_hex(&self) -> String {
        self.keys.public_hex()
    }

    /// An engine over this fixture's identity, no proof-of-work, no
    /// delegation.
    pub fn engine(&self) -> EventEngine {
        EventEngine::new(self.keys.clone())
    }

    /// Build and sign a kind-1 text note.
    pub fn make_text_note(&self, text: &str) -> strand_engine::Result<Event> {
        let draft = kinds::text_note(&self.public_hex(), text);
        self.engine().build(draft)
    }

    /// Build and sign an arbitrary draft.
    pub fn make_signed(&self, draft: EventDraft) -> strand_engine::Result<Event> {
        self.engine().build(draft)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create multiple test fixtures for multi-party tests.
pub fn multi_party_fixtures(count: usize) -> Vec<TestFixture> {
    (0..count)
        .map(|i| {
            // Low byte must stay non-zero: zero is not a valid scalar.
            let mut seed = [0u8; 32];
            seed[31] = (i + 1) as u8;
            TestFixture::with_seed(seed)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_signs_valid_events() {
        let fixture = TestFixture::new();
        let event = fixture.make_text_note("hello").unwrap();

        assert_eq!(event.kind, 1);
        assert_eq!(event.pubkey, fixture.public_hex());
        assert!(fixture.engine().verify(&event).is_ok());
    }

    #[test]
    fn test_with_seed_is_deterministic() {
        let a = TestFixture::with_seed([0x42; 32]);
        let b = TestFixture::with_seed([0x42; 32]);
        assert_eq!(a.public_hex(), b.public_hex());
    }

    #[test]
    fn test_multi_party_fixtures_have_unique_keys() {
        let parties = multi_party_fixtures(3);
        let pks: Vec<_> = parties.iter().map(|p| p.public_hex()).collect();
        assert_ne!(pks[0], pks[1]);
        assert_ne!(pks[1], pks[2]);
        assert_ne!(pks[0], pks[2]);
    }
}
