//! # Strand Testkit
//!
//! Testing utilities for the Strand event engine.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known drafts with deterministic keys for
//!   cross-implementation addressing checks
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Helper structs for setting up signing scenarios
//!
//! ## Test Fixtures
//!
//! Quickly set up a signing identity and engine:
//!
//! ```rust
//! use strand_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let event = fixture.make_text_note("hello").unwrap();
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use strand_testkit::generators::{draft_from_params, DraftParams};
//!
//! proptest! {
//!     #[test]
//!     fn event_id_is_deterministic(params: DraftParams) {
//!         let draft = draft_from_params(&params);
//!         prop_assert_eq!(
//!             strand_core::compute_id(&draft),
//!             strand_core::compute_id(&draft),
//!         );
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{multi_party_fixtures, TestFixture};
pub use generators::{draft_from_params, DraftParams};
pub use vectors::{all_vectors, draft_from_vector, GoldenVector};
