//! Subject domain model.
//!
//! # Responsibility
//! - Define the canonical attendance record and its persisted envelope.
//! - Provide validation for names, targets and counter consistency.
//!
//! # Invariants
//! - `id` is stable and never reused for another subject.
//! - `target` stays within `(0, 100]`.
//! - `present <= total` after every counter mutation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for a tracked subject.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type SubjectId = Uuid;

/// Default attendance target offered by the add-subject form.
pub const DEFAULT_TARGET_PERCENT: u32 = 75;

/// Validation failure for subject fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectValidationError {
    /// Name is empty after trimming surrounding whitespace.
    EmptyName,
    /// Target percentage falls outside `(0, 100]`.
    TargetOutOfRange(u32),
    /// Counter invariant `present <= total` is violated.
    CountersInverted { present: u32, total: u32 },
}

impl Display for SubjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "subject name cannot be empty"),
            Self::TargetOutOfRange(target) => {
                write!(f, "target {target} is outside the valid range (0, 100]")
            }
            Self::CountersInverted { present, total } => {
                write!(f, "present ({present}) must be <= total ({total})")
            }
        }
    }
}

impl Error for SubjectValidationError {}

/// Canonical record for one tracked subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Stable global ID used for lookups and mutation targeting.
    pub id: SubjectId,
    /// Display name, non-empty after trim.
    pub name: String,
    /// Attendance goal as an integer percentage in `(0, 100]`.
    pub target: u32,
    /// Count of attended classes.
    pub present: u32,
    /// Count of held classes.
    pub total: u32,
    /// Unix epoch milliseconds at creation. Informational only.
    pub created_at_ms: i64,
}

impl Subject {
    /// Creates a new subject with zeroed counters and a generated stable ID.
    ///
    /// Caller is responsible for validating `name` and `target` first; the
    /// store does so before constructing a subject.
    pub fn new(name: impl Into<String>, target: u32) -> Self {
        Self::with_id(Uuid::new_v4(), name, target)
    }

    /// Creates a subject with a caller-provided stable ID.
    ///
    /// Used by tests and import paths where identity already exists.
    pub fn with_id(id: SubjectId, name: impl Into<String>, target: u32) -> Self {
        Self {
            id,
            name: name.into(),
            target,
            present: 0,
            total: 0,
            created_at_ms: now_epoch_ms(),
        }
    }

    /// Checks all field-level invariants.
    pub fn validate(&self) -> Result<(), SubjectValidationError> {
        if self.name.trim().is_empty() {
            return Err(SubjectValidationError::EmptyName);
        }
        if !target_in_range(self.target) {
            return Err(SubjectValidationError::TargetOutOfRange(self.target));
        }
        if self.present > self.total {
            return Err(SubjectValidationError::CountersInverted {
                present: self.present,
                total: self.total,
            });
        }
        Ok(())
    }

    /// Records one attended class: both counters advance together.
    pub fn mark_present(&mut self) {
        self.present += 1;
        self.total += 1;
    }

    /// Records one missed class: only the held-class counter advances.
    ///
    /// There is no inverse operation; a mis-click is corrected by editing
    /// raw counts, not by an undo path.
    pub fn mark_absent(&mut self) {
        self.total += 1;
    }
}

/// Optional-field update request for `update_subject`.
///
/// Only fields carrying `Some` are merged; counters, id and creation time
/// are never touched by an update request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectUpdate {
    pub name: Option<String>,
    pub target: Option<u32>,
}

impl SubjectUpdate {
    /// Returns whether this request would change anything at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.target.is_none()
    }
}

/// Persisted envelope: the full ordered subject collection.
///
/// Order is insertion order and display-significant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceData {
    #[serde(default)]
    pub subjects: Vec<Subject>,
}

/// Returns a trimmed copy of `name`, or `None` when it trims to empty.
pub fn normalize_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Returns whether a target percentage lies in `(0, 100]`.
pub fn target_in_range(target: u32) -> bool {
    target >= 1 && target <= 100
}

/// Current wall clock as Unix epoch milliseconds.
///
/// Clocks before the epoch collapse to 0 rather than failing; the value is
/// informational only.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
