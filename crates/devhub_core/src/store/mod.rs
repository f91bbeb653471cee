//! In-memory entity storage.
//!
//! # Responsibility
//! - Hold the ordered collection for one entity kind.
//! - Offer create/update/delete with newest-first insertion.
//!
//! # Invariants
//! - `create` prepends; `update` replaces in place; `delete` removes one.
//! - Missing ids never mutate the collection; they are reported, not raised.

pub mod entity_store;

pub use entity_store::{EntityStore, MutationOutcome};
