//! The EventEngine: unsigned payload in, signed event out.
//!
//! An engine holds one identity plus optional proof-of-work and delegation
//! settings, all fixed at construction. `build` runs the whole pipeline
//! synchronously and returns before anything else happens; the only
//! unbounded-duration step is mining, which is CPU-bound and should be run
//! off latency-sensitive contexts.

use strand_core::{
    canonical, pow, validation, Delegation, Event, EventDraft, Keys, PowConfig,
};

use crate::error::Result;
use crate::wire::ClientFrame;

/// The event construction engine.
///
/// Immutable after construction: there is no delegation or difficulty
/// setter, which makes a shared `&EventEngine` free of cross-call state.
#[derive(Debug, Clone)]
pub struct EventEngine {
    /// The identity events are signed with.
    keys: Keys,
    /// Optional proof-of-work settings.
    pow: Option<PowConfig>,
    /// Optional delegation attached to every built event.
    delegation: Option<Delegation>,
}

impl EventEngine {
    /// Create an engine for the given identity.
    pub fn new(keys: Keys) -> Self {
        Self {
            keys,
            pow: None,
            delegation: None,
        }
    }

    /// Return an engine that proof-of-work-hardens every built event.
    pub fn with_pow(mut self, config: PowConfig) -> Self {
        self.pow = Some(config);
        self
    }

    /// Return an engine that attaches `delegation` to every built event.
    ///
    /// The tag is appended before validation and addressing, so it is part
    /// of the signed content.
    pub fn with_delegation(mut self, delegation: Delegation) -> Self {
        self.delegation = Some(delegation);
        self
    }

    /// The engine's identity.
    pub fn keys(&self) -> &Keys {
        &self.keys
    }

    /// The engine's public key as 64 lowercase hex characters.
    pub fn public_hex(&self) -> String {
        self.keys.public_hex()
    }

    /// The delegation this engine attaches, if any.
    pub fn delegation(&self) -> Option<&Delegation> {
        self.delegation.as_ref()
    }

    /// The proof-of-work settings, if any.
    pub fn pow(&self) -> Option<&PowConfig> {
        self.pow.as_ref()
    }

    /// Build a signed event from an unsigned draft.
    ///
    /// Pipeline: attach delegation tag (if configured) → validate → mine or
    /// digest → sign → assemble. Fails with `KeyError::MissingSecretKey` on
    /// a verify-only engine; nothing partial is ever returned.
    pub fn build(&self, draft: EventDraft) -> Result<Event> {
        let mut draft = draft;
        if let Some(delegation) = &self.delegation {
            draft.tags.push(delegation.to_tag());
        }

        validation::validate_draft(&draft)?;

        let (draft, id) = match &self.pow {
            Some(config) => pow::mine(&draft, config)?,
            None => {
                let id = canonical::compute_id(&draft);
                (draft, id)
            }
        };

        let sig = self.keys.sign_digest(*id.as_bytes())?;
        tracing::debug!(id = %id, kind = draft.kind, "event built");

        Ok(Event {
            id,
            pubkey: draft.pubkey,
            created_at: draft.created_at,
            kind: draft.kind,
            tags: draft.tags,
            content: draft.content,
            sig,
        })
    }

    /// Build a signed event and wrap it as an `["EVENT", ...]` frame.
    pub fn build_frame(&self, draft: EventDraft) -> Result<ClientFrame> {
        Ok(ClientFrame::Event(self.build(draft)?))
    }

    /// Verify a signed event: id recomputation plus signature check.
    pub fn verify(&self, event: &Event) -> Result<()> {
        validation::verify_event(event)?;
        Ok(())
    }
}

/// Current time as Unix seconds.
pub(crate) fn now_unix() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_secs() as i64
}
