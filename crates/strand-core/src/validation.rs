//! Event validation: draft field-shape checks and signed-event verification.

use serde_json::Value;

use crate::canonical::compute_id;
use crate::crypto::{is_lower_hex, PublicKey};
use crate::error::ValidationError;
use crate::event::{Event, EventDraft, Tag, MAX_EVENT_KIND};

/// Validate a typed draft before addressing and signing.
///
/// Checks, in order: pubkey is exactly 64 lowercase hex characters; kind is
/// in 0..=31999. The remaining field shapes (`created_at` integer, tags as
/// string sequences, content string) are enforced by the types. Fails fast,
/// no side effects.
pub fn validate_draft(draft: &EventDraft) -> Result<(), ValidationError> {
    if !is_lower_hex(&draft.pubkey, 64) {
        return Err(ValidationError::InvalidPubkey);
    }
    if !(0..=MAX_EVENT_KIND).contains(&draft.kind) {
        return Err(ValidationError::KindOutOfRange(draft.kind));
    }
    Ok(())
}

/// Build a draft from a loosely typed JSON payload, checking every field
/// shape.
///
/// Checks, in order: `pubkey` is a 64-lowercase-hex string; `created_at` is
/// an integer; `kind` is an integer in 0..=31999; `tags` is an array of
/// string arrays; `content` is a string. Fails fast on the first violated
/// field.
pub fn draft_from_value(value: &Value) -> Result<EventDraft, ValidationError> {
    let pubkey = match value.get("pubkey").and_then(Value::as_str) {
        Some(s) if is_lower_hex(s, 64) => s.to_string(),
        _ => return Err(ValidationError::InvalidPubkey),
    };

    let created_at = value
        .get("created_at")
        .and_then(Value::as_i64)
        .ok_or(ValidationError::InvalidCreatedAt)?;

    let kind = value
        .get("kind")
        .and_then(Value::as_i64)
        .ok_or(ValidationError::InvalidKind)?;
    if !(0..=MAX_EVENT_KIND).contains(&kind) {
        return Err(ValidationError::KindOutOfRange(kind));
    }

    let tags = match value.get("tags") {
        Some(Value::Array(rows)) => {
            let mut tags = Vec::with_capacity(rows.len());
            for row in rows {
                let parts = match row {
                    Value::Array(parts) => parts,
                    _ => return Err(ValidationError::InvalidTags),
                };
                let mut tag = Vec::with_capacity(parts.len());
                for part in parts {
                    match part {
                        Value::String(s) => tag.push(s.clone()),
                        _ => return Err(ValidationError::InvalidTags),
                    }
                }
                tags.push(Tag(tag));
            }
            tags
        }
        None => Vec::new(),
        _ => return Err(ValidationError::InvalidTags),
    };

    let content = match value.get("content") {
        Some(Value::String(s)) => s.clone(),
        _ => return Err(ValidationError::InvalidContent),
    };

    Ok(EventDraft {
        pubkey,
        created_at,
        kind,
        tags,
        content,
    })
}

/// Verify a signed event: id must equal the canonical digest and the
/// signature must verify over the id bytes under the event's pubkey.
pub fn verify_event(event: &Event) -> Result<(), ValidationError> {
    let draft = event.draft();
    validate_draft(&draft)?;

    if compute_id(&draft) != event.id {
        return Err(ValidationError::IdMismatch);
    }

    let pubkey =
        PublicKey::from_hex(&event.pubkey).map_err(|_| ValidationError::InvalidPubkey)?;
    if !pubkey.verify_digest(*event.id.as_bytes(), &event.sig) {
        return Err(ValidationError::SignatureFailed);
    }

    Ok(())
}
