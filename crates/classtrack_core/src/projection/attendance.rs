//! Attendance projector.
//!
//! # Responsibility
//! - Derive percentage, status, safe absences and required attendance from
//!   one subject's counters.
//!
//! # Invariants
//! - Pure and total: never fails, never mutates, zero-total is defined as 0%.
//! - Threshold comparisons are exact rational comparisons done in integer
//!   arithmetic, so `present/total` is never rounded before classification.

use crate::model::subject::Subject;
use serde::{Deserialize, Serialize};

/// Three-valued attendance standing relative to the subject's target.
///
/// `Warning` covers a ten-percentage-point buffer zone directly below target
/// before severity escalates to `Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Percentage meets or exceeds target.
    OnTrack,
    /// Percentage is below target by less than ten points.
    Warning,
    /// Percentage is below target by ten points or more.
    Critical,
}

/// Read-only view metrics derived from one subject.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AttendanceProjection {
    /// Attendance percentage, 0 when no class has been held yet.
    pub percentage: f64,
    pub status: AttendanceStatus,
    /// Additional classes that can be missed while staying at target.
    /// Zero whenever the subject is below target.
    pub safe_absences: u32,
    /// Consecutive classes that must be attended to reach target.
    /// Zero whenever the subject is at or above target.
    pub required_attendance: u32,
}

/// Projects all display metrics for one subject.
pub fn project(subject: &Subject) -> AttendanceProjection {
    AttendanceProjection {
        percentage: percentage(subject),
        status: classify(subject),
        safe_absences: safe_absences(subject),
        required_attendance: required_attendance(subject),
    }
}

/// Attendance percentage of a subject; defined as 0 when `total == 0`.
pub fn percentage(subject: &Subject) -> f64 {
    if subject.total == 0 {
        return 0.0;
    }
    f64::from(subject.present) / f64::from(subject.total) * 100.0
}

/// Classifies a subject's standing against its target.
pub fn classify(subject: &Subject) -> AttendanceStatus {
    if meets_ratio(subject.present, subject.total, i64::from(subject.target)) {
        return AttendanceStatus::OnTrack;
    }
    if meets_ratio(
        subject.present,
        subject.total,
        i64::from(subject.target) - 10,
    ) {
        return AttendanceStatus::Warning;
    }
    AttendanceStatus::Critical
}

/// How many additional classes can be held (and missed) before the
/// percentage drops below target, assuming no further attended classes.
///
/// Defined only when the subject already meets target and `total > 0`;
/// every other case yields 0.
pub fn safe_absences(subject: &Subject) -> u32 {
    if subject.total == 0 || subject.target == 0 {
        return 0;
    }
    if !meets_ratio(subject.present, subject.total, i64::from(subject.target)) {
        return 0;
    }

    let present = u64::from(subject.present);
    let total = u64::from(subject.total);
    let target = u64::from(subject.target);

    // Minimum presents needed for the current total to meet target.
    let required_present = ceil_percent(target, total);
    if present < required_present {
        // Unreachable under the meets-target guard; clamp anyway.
        return 0;
    }

    // Largest total for which the current present count still meets target.
    let max_total = present * 100 / target;
    max_total.saturating_sub(total) as u32
}

/// How many consecutive attended classes are needed to reach target, where
/// each attended class also adds to the held-class total.
///
/// Defined only when the subject is below target and `total > 0`; every
/// other case yields 0.
pub fn required_attendance(subject: &Subject) -> u32 {
    if subject.total == 0 {
        return 0;
    }
    if meets_ratio(subject.present, subject.total, i64::from(subject.target)) {
        return 0;
    }

    let present = u64::from(subject.present);
    let total = u64::from(subject.total);
    let target = u64::from(subject.target);

    // Presents needed assuming one more class is held and attended.
    let required_present = ceil_percent(target, total + 1);
    required_present.saturating_sub(present) as u32
}

/// Whether `present/total * 100 >= threshold`, evaluated exactly.
///
/// A zero total never meets a positive threshold (0% by definition).
fn meets_ratio(present: u32, total: u32, threshold_percent: i64) -> bool {
    if total == 0 {
        // Zero held classes means 0%, compared against the threshold as-is.
        return 0 >= threshold_percent;
    }
    i64::from(present) * 100 >= threshold_percent * i64::from(total)
}

/// `ceil(target/100 * count)` in integer arithmetic.
fn ceil_percent(target: u64, count: u64) -> u64 {
    (target * count + 99) / 100
}
