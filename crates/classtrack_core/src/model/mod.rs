//! Domain model for attendance tracking and the notes catalog.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep validation rules for counters and targets in one place.
//!
//! # Invariants
//! - Every subject is identified by a stable `SubjectId`.
//! - `present <= total` holds for every persisted or in-memory subject.

pub mod notes;
pub mod subject;
