//! # Strand Engine
//!
//! The orchestration layer of the strand event engine: a configured
//! [`EventEngine`] turns unsigned payloads into signed, content-addressed
//! events and wraps them in client wire frames.
//!
//! ## Overview
//!
//! - **Build pipeline**: attach delegation tag → validate → proof-of-work
//!   (if configured) → sign → assembled [`Event`](strand_core::Event)
//! - **Kinds**: typed draft builders for the common event kinds
//!   (metadata, notes, contact lists, polls, calendar events, ...)
//! - **Wire**: `["EVENT", ...]` / `["REQ", ...]` / `["CLOSE", ...]` /
//!   `["NOTICE", ...]` frame wrappers for a transport collaborator
//!
//! ## Usage
//!
//! ```rust
//! use strand_core::{Keys, PowConfig};
//! use strand_engine::{kinds, EventEngine};
//!
//! let keys = Keys::generate();
//! let engine = EventEngine::new(keys).with_pow(PowConfig::new(2));
//!
//! let draft = kinds::text_note(&engine.public_hex(), "hello, relay");
//! let event = engine.build(draft).unwrap();
//! assert!(engine.verify(&event).is_ok());
//! ```
//!
//! The engine is immutable after construction: delegation and proof-of-work
//! settings are fixed by the `with_*` builders, so a shared engine reference
//! is safe to use from multiple threads.

pub mod engine;
pub mod error;
pub mod kinds;
pub mod wire;

pub use engine::EventEngine;
pub use error::{EngineError, Result};
pub use wire::ClientFrame;

// Re-export commonly used core types
pub use strand_core::{
    Delegation, Event, EventDraft, EventId, Keys, PowConfig, PublicKey, SchnorrSignature, Tag,
};
