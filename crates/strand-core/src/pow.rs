//! Proof-of-work mining: brute-force nonce search over the event id.
//!
//! A mined event carries a `["nonce", <nonce>, <target>]` tag whose value
//! makes the content-address satisfy the difficulty predicate. Candidates
//! are produced lazily so callers control how long the search runs; `mine`
//! drives the sequence with an optional attempt cap and reports a distinct
//! outcome when the cap is exhausted.
//!
//! The difficulty predicate requires the leading-zero-bit count of the id to
//! equal the target *exactly*, not "at least". This matches the protocol
//! behavior this engine targets; see `meets_target`.

use crate::canonical::compute_id;
use crate::error::PowError;
use crate::event::{EventDraft, EventId, Tag};

/// Proof-of-work configuration for an engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowConfig {
    /// Required count of leading zero bits in the id.
    pub target: u32,

    /// Maximum candidates to try before giving up. `None` runs until a
    /// nonce is found, which is CPU-bound and unbounded for poorly chosen
    /// targets; run it off any latency-sensitive context.
    pub max_attempts: Option<u64>,
}

impl PowConfig {
    /// Unbounded search for the given target.
    pub fn new(target: u32) -> Self {
        Self {
            target,
            max_attempts: None,
        }
    }

    /// Cap the search at `max_attempts` candidates.
    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }
}

/// Count of leading zero bits in a byte string.
pub fn leading_zero_bits(bytes: &[u8]) -> u32 {
    let mut count = 0;
    for byte in bytes {
        if *byte == 0 {
            count += 8;
        } else {
            count += byte.leading_zeros();
            break;
        }
    }
    count
}

/// The difficulty predicate: the id's leading-zero-bit count equals the
/// target exactly.
pub fn meets_target(id: &EventId, target: u32) -> bool {
    leading_zero_bits(id.as_bytes()) == target
}

/// A single mining candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// The nonce that produced this candidate.
    pub nonce: u64,
    /// The id of the draft with the candidate nonce tag appended.
    pub id: EventId,
}

/// Lazy, restartable sequence of mining candidates for a draft.
///
/// Each step appends a working `["nonce", n, target]` tag to a copy of the
/// draft's tag sequence and addresses the result. The sequence is infinite;
/// the stop predicate belongs to the driver.
#[derive(Debug)]
pub struct NonceCandidates<'a> {
    draft: &'a EventDraft,
    target: u32,
    next_nonce: u64,
}

impl<'a> NonceCandidates<'a> {
    /// Start a candidate sequence at nonce 1.
    pub fn new(draft: &'a EventDraft, target: u32) -> Self {
        Self {
            draft,
            target,
            next_nonce: 1,
        }
    }

    /// Produce the next candidate. Always succeeds; nonces never run out.
    pub fn next_candidate(&mut self) -> Candidate {
        let nonce = self.next_nonce;
        self.next_nonce += 1;

        let mut candidate = self.draft.clone();
        candidate.tags.push(nonce_tag(nonce, self.target));
        Candidate {
            nonce,
            id: compute_id(&candidate),
        }
    }
}

impl Iterator for NonceCandidates<'_> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        Some(self.next_candidate())
    }
}

/// Mine a draft until the difficulty predicate holds.
///
/// On success, returns the draft with the winning nonce tag permanently
/// appended to its tag sequence, together with the satisfying id. With a
/// `max_attempts` cap, returns `PowError::TargetNotReached` once the cap is
/// exhausted; without one, runs to completion.
pub fn mine(draft: &EventDraft, config: &PowConfig) -> Result<(EventDraft, EventId), PowError> {
    let mut candidates = NonceCandidates::new(draft, config.target);
    let mut attempts: u64 = 0;

    loop {
        let candidate = candidates.next_candidate();
        attempts += 1;

        if meets_target(&candidate.id, config.target) {
            tracing::debug!(
                nonce = candidate.nonce,
                attempts,
                target = config.target,
                "proof-of-work nonce found"
            );
            let mut mined = draft.clone();
            mined.tags.push(nonce_tag(candidate.nonce, config.target));
            return Ok((mined, candidate.id));
        }

        if let Some(max) = config.max_attempts {
            if attempts >= max {
                tracing::warn!(
                    attempts,
                    target = config.target,
                    "proof-of-work attempt cap exhausted"
                );
                return Err(PowError::TargetNotReached {
                    target: config.target,
                    attempts,
                });
            }
        }
    }
}

fn nonce_tag(nonce: u64, target: u32) -> Tag {
    Tag::new(["nonce".to_string(), nonce.to_string(), target.to_string()])
}
