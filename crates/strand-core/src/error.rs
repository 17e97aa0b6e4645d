//! Error types for strand core.

use thiserror::Error;

/// Errors establishing or using a signing identity.
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("missing private or public key")]
    Missing,

    #[error("no secret key: engine is verify-only")]
    MissingSecretKey,

    #[error("public key does not match the secret key derivation")]
    Mismatch,

    #[error("invalid secret key: expected 64 lowercase hex characters encoding a valid scalar")]
    InvalidSecretKey,

    #[error("invalid public key: expected 64 lowercase hex characters encoding an x-only point")]
    InvalidPublicKey,
}

/// Errors decoding core data structures from their external form.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("malformed tag: {0}")]
    MalformedTag(String),

    #[error("invalid hex: {0}")]
    InvalidHex(String),
}

/// Validation errors for event payloads and signed events.
///
/// Each variant names the offending field and the violated constraint.
/// Validation fails fast on the first violation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid pubkey: expected exactly 64 lowercase hex characters")]
    InvalidPubkey,

    #[error("invalid created_at: expected an integer")]
    InvalidCreatedAt,

    #[error("invalid kind: expected an integer")]
    InvalidKind,

    #[error("kind {0} out of range: expected 0..=31999")]
    KindOutOfRange(i64),

    #[error("invalid tags: expected an array of string arrays")]
    InvalidTags,

    #[error("invalid content: expected a string")]
    InvalidContent,

    #[error("event id does not match the canonical digest")]
    IdMismatch,

    #[error("signature verification failed")]
    SignatureFailed,
}

/// Proof-of-work mining errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PowError {
    #[error("target of {target} leading zero bits not reached within {attempts} attempts")]
    TargetNotReached { target: u32, attempts: u64 },
}
