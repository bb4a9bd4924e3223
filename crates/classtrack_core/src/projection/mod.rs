//! Pure projections derived from subject counters.
//!
//! # Responsibility
//! - Compute display metrics from attendance counters without side effects.
//! - Keep all divide-by-zero paths explicit.
//!
//! # Invariants
//! - Projection never fails and never mutates its input.

pub mod attendance;
