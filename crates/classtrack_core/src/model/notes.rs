//! Notes catalog model: academic years, semesters and uploaded files.
//!
//! # Responsibility
//! - Define the hierarchical shape of the notes catalog.
//! - Provide the default four-year seed used when no saved state exists.
//!
//! # Invariants
//! - Year and semester ids are fixed slugs from the default seed.
//! - File ids are stable and never reused within a catalog.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an uploaded file.
pub type FileId = Uuid;

/// One uploaded file stored inside a semester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub id: FileId,
    /// Original file name as chosen by the user.
    pub name: String,
    /// Size of the decoded content in bytes.
    pub size_bytes: u64,
    /// Media kind, e.g. `application/pdf`.
    pub kind: String,
    /// Unix epoch milliseconds at upload time.
    pub uploaded_at_ms: i64,
    /// Base64-encoded file content.
    pub content: String,
}

impl UploadedFile {
    /// Creates a file record with a generated stable ID.
    pub fn new(
        name: impl Into<String>,
        size_bytes: u64,
        kind: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            size_bytes,
            kind: kind.into(),
            uploaded_at_ms: crate::model::subject::now_epoch_ms(),
            content: content.into(),
        }
    }
}

/// One semester bucket holding uploaded files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub files: Vec<UploadedFile>,
}

/// One academic year holding two semesters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicYear {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub semesters: Vec<Semester>,
}

/// Persisted envelope for the notes catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotesData {
    #[serde(default)]
    pub years: Vec<AcademicYear>,
}

impl NotesData {
    /// Default catalog: four academic years, two semesters each, no files.
    pub fn seed() -> Self {
        let ordinals = [
            ("first-year", "First Year"),
            ("second-year", "Second Year"),
            ("third-year", "Third Year"),
            ("fourth-year", "Fourth Year"),
        ];
        let semester_names = [
            "First Semester",
            "Second Semester",
            "Third Semester",
            "Fourth Semester",
            "Fifth Semester",
            "Sixth Semester",
            "Seventh Semester",
            "Eighth Semester",
        ];

        let years = ordinals
            .iter()
            .enumerate()
            .map(|(year_index, (year_id, year_name))| AcademicYear {
                id: (*year_id).to_string(),
                name: (*year_name).to_string(),
                semesters: (0..2)
                    .map(|half| {
                        let ordinal = year_index * 2 + half;
                        Semester {
                            id: format!("semester-{}", ordinal + 1),
                            name: semester_names[ordinal].to_string(),
                            files: Vec::new(),
                        }
                    })
                    .collect(),
            })
            .collect();

        Self { years }
    }
}

impl Default for NotesData {
    fn default() -> Self {
        Self::seed()
    }
}
