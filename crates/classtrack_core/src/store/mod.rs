//! Stateful stores owning application collections.
//!
//! # Responsibility
//! - Own all mutable domain state and enforce mutation rules.
//! - Snapshot full state to the injected slot repository after every
//!   successful mutation.
//!
//! # Invariants
//! - A mutation either fully succeeds in memory or is rejected before any
//!   state change; there is no partial-mutation rollback.
//! - Stores are constructed with an explicit slot repository; there is no
//!   hidden process-wide singleton.

pub mod notes_store;
pub mod subject_store;
