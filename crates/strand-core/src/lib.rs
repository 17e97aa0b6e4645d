//! # Strand Core
//!
//! Pure primitives for the strand event engine: events, canonicalization,
//! content addressing, proof-of-work, and authorship delegation.
//!
//! This crate contains no I/O and no networking. It is pure computation
//! over cryptographic data structures.
//!
//! ## Key Types
//!
//! - [`Event`] - A signed, content-addressed protocol message
//! - [`EventDraft`] - The unsigned `(pubkey, created_at, kind, tags, content)` payload
//! - [`EventId`] - Content-addressed identifier (SHA-256 of the canonical bytes)
//! - [`Keys`] - Signing identity (x-only public key, optional secret key)
//! - [`Delegation`] - A NIP-26 authorship delegation, independently verifiable
//!
//! ## Canonicalization
//!
//! All events are addressed through the deterministic NIP-01 serialization
//! `[0, pubkey, created_at, kind, tags, content]`. See [`canonical`].

pub mod canonical;
pub mod crypto;
pub mod delegation;
pub mod error;
pub mod event;
pub mod keys;
pub mod pow;
pub mod validation;

pub use canonical::{canonical_bytes, compute_id};
pub use crypto::{PublicKey, SchnorrSignature, Sha256Hash};
pub use delegation::{verify_delegation_tag, Delegation};
pub use error::{CoreError, KeyError, PowError, ValidationError};
pub use event::{Event, EventDraft, EventId, Tag};
pub use keys::Keys;
pub use pow::{mine, NonceCandidates, PowConfig};
pub use validation::{draft_from_value, validate_draft, verify_event};
