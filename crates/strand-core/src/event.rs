//! Event: the atomic unit of the wire protocol.
//!
//! An event is an immutable, signed, content-addressed message. Any field
//! change after signing invalidates both `id` and `sig`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::crypto::SchnorrSignature;

/// Highest event kind addressed by this engine.
pub const MAX_EVENT_KIND: i64 = 31_999;

/// A 32-byte event identifier, computed as SHA-256 of the canonical bytes.
///
/// This is the content-address of an event. Two events with the same
/// addressable fields have the same EventId.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventId(pub [u8; 32]);

impl EventId {
    /// Create a new EventId from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string (lowercase, 64 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EventId({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl AsRef<[u8]> for EventId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for EventId {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl Serialize for EventId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for EventId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// An ordered string-sequence annotation attached to an event.
///
/// The first element is the type discriminator (`"p"`, `"e"`, `"nonce"`,
/// `"delegation"`, ...). Element order within a tag and tag order within an
/// event are both semantically significant: both feed the canonical bytes
/// and therefore the event id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(pub Vec<String>);

impl Tag {
    /// Build a tag from its ordered parts.
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(parts.into_iter().map(Into::into).collect())
    }

    /// The type discriminator (first element), if any.
    pub fn name(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Element at position `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the tag has no elements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The unsigned payload of an event: everything that feeds the canonical
/// serialization, before addressing and signing.
///
/// `pubkey` and `kind` are deliberately loose (`String`, wide integer):
/// drafts arrive from external payload builders, and checking their shape is
/// the validator's job, not the type system's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    /// Author public key, 64 lowercase hex characters.
    pub pubkey: String,

    /// Author-claimed creation time (Unix seconds). Untrusted.
    pub created_at: i64,

    /// Event kind, valid range 0..=31999.
    pub kind: i64,

    /// Ordered tag sequence.
    pub tags: Vec<Tag>,

    /// Free-form content.
    pub content: String,
}

impl EventDraft {
    /// Create a new draft.
    pub fn new(
        pubkey: impl Into<String>,
        created_at: i64,
        kind: i64,
        tags: Vec<Tag>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            pubkey: pubkey.into(),
            created_at,
            kind,
            tags,
            content: content.into(),
        }
    }
}

/// A complete signed event: draft fields plus `id` and `sig`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Content-address: SHA-256 of the canonical serialization.
    pub id: EventId,

    /// Author public key, 64 lowercase hex characters.
    pub pubkey: String,

    /// Author-claimed creation time (Unix seconds). Untrusted.
    pub created_at: i64,

    /// Event kind.
    pub kind: i64,

    /// Ordered tag sequence (includes any nonce and delegation tags).
    pub tags: Vec<Tag>,

    /// Free-form content.
    pub content: String,

    /// BIP-340 signature over the id bytes.
    pub sig: SchnorrSignature,
}

impl Event {
    /// Reconstruct the unsigned draft, e.g. to recompute the id.
    pub fn draft(&self) -> EventDraft {
        EventDraft {
            pubkey: self.pubkey.clone(),
            created_at: self.created_at,
            kind: self.kind,
            tags: self.tags.clone(),
            content: self.content.clone(),
        }
    }

    /// Tags with the given type discriminator.
    pub fn tags_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Tag> {
        self.tags.iter().filter(move |t| t.name() == Some(name))
    }
}
