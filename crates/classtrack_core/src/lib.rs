//! Core domain logic for classtrack.
//! This crate is the single source of truth for attendance business rules.

pub mod db;
pub mod logging;
pub mod model;
pub mod persist;
pub mod projection;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::notes::{AcademicYear, FileId, NotesData, Semester, UploadedFile};
pub use model::subject::{
    AttendanceData, Subject, SubjectId, SubjectUpdate, SubjectValidationError,
    DEFAULT_TARGET_PERCENT,
};
pub use persist::{PersistError, PersistResult, SlotRepository, SqliteSlotRepository};
pub use projection::attendance::{project, AttendanceProjection, AttendanceStatus};
pub use store::notes_store::{NoteSearchHit, NotesStore, NOTES_SLOT_KEY};
pub use store::subject_store::{SubjectStore, ATTENDANCE_SLOT_KEY};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
