//! Canonical serialization and content addressing.
//!
//! The addressable fields of an event are serialized as the fixed 6-element
//! JSON array `[0, pubkey, created_at, kind, tags, content]` with no
//! whitespace, exact order preservation, and plain base-10 integers. The
//! event id is the SHA-256 of these bytes, so byte-identical serialization
//! for byte-identical logical input is a hard requirement: every
//! implementation of the protocol must produce the same bytes for the same
//! tuple.

use crate::crypto::Sha256Hash;
use crate::event::{EventDraft, EventId};

/// Encode a draft to its canonical bytes.
///
/// Array and tag ordering are preserved exactly as given; `serde_json`
/// compact output has no whitespace and uses the protocol's string escaping.
pub fn canonical_bytes(draft: &EventDraft) -> Vec<u8> {
    let tuple = (
        0u8,
        &draft.pubkey,
        draft.created_at,
        draft.kind,
        &draft.tags,
        &draft.content,
    );
    serde_json::to_vec(&tuple).expect("canonical tuple serialization failed")
}

/// Compute the content-address of a draft: SHA-256 of the canonical bytes.
pub fn compute_id(draft: &EventDraft) -> EventId {
    EventId(Sha256Hash::hash(&canonical_bytes(draft)).0)
}
