//! Proptest generators for property-based testing.

use proptest::prelude::*;

use strand_core::{EventDraft, Keys, Tag};

/// Generate a random signing identity.
///
/// Seeds that are not valid secp256k1 scalars (zero, or at or above the
/// curve order) are filtered out.
pub fn keys() -> impl Strategy<Value = Keys> {
    any::<[u8; 32]>().prop_filter_map("seed must be a valid secret scalar", |seed| {
        Keys::from_seed(&seed).ok()
    })
}

/// Generate a 64-character lowercase hex public key string.
///
/// Hex-shaped only; not necessarily a valid curve point. Use [`keys`] when
/// signature verification has to succeed.
pub fn pubkey_hex() -> impl Strategy<Value = String> {
    "[0-9a-f]{64}".prop_map(String::from)
}

/// Generate a valid event kind.
pub fn kind() -> impl Strategy<Value = i64> {
    0i64..=31_999
}

/// Generate a reasonable timestamp (Unix seconds).
pub fn timestamp() -> impl Strategy<Value = i64> {
    0i64..=4_000_000_000
}

/// Generate a single tag with a short name and 0..=3 values.
pub fn tag() -> impl Strategy<Value = Tag> {
    (
        "[a-z]{1,10}",
        prop::collection::vec(".{0,30}", 0..=3),
    )
        .prop_map(|(name, values)| {
            let mut parts = vec![name];
            parts.extend(values);
            Tag(parts)
        })
}

/// Generate a tag sequence.
pub fn tags() -> impl Strategy<Value = Vec<Tag>> {
    prop::collection::vec(tag(), 0..=5)
}

/// Parameters for generating a draft with a real signing identity.
#[derive(Debug, Clone)]
pub struct DraftParams {
    pub keys: Keys,
    pub created_at: i64,
    pub kind: i64,
    pub tags: Vec<Tag>,
    pub content: String,
}

impl Arbitrary for DraftParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (keys(), timestamp(), kind(), tags(), ".{0,200}")
            .prop_map(|(keys, created_at, kind, tags, content)| DraftParams {
                keys,
                created_at,
                kind,
                tags,
                content,
            })
            .boxed()
    }
}

/// Generate a draft from parameters.
pub fn draft_from_params(params: &DraftParams) -> EventDraft {
    EventDraft::new(
        params.keys.public_hex(),
        params.created_at,
        params.kind,
        params.tags.clone(),
        params.content.clone(),
    )
}
