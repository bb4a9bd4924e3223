//! Notes store: hierarchical file catalog per academic year and semester.
//!
//! # Responsibility
//! - Own the notes catalog and apply file add/remove mutations.
//! - Persist the full catalog after every successful mutation.
//!
//! # Invariants
//! - Missing or malformed persisted state loads the default seed catalog.
//! - Mutations referencing unknown year/semester ids are silent no-ops.

use crate::model::notes::{AcademicYear, FileId, NotesData, Semester, UploadedFile};
use crate::persist::{PersistResult, SlotRepository};
use log::{debug, info, warn};

/// Storage key for the persisted notes catalog.
pub const NOTES_SLOT_KEY: &str = "student_notes";

/// One match from a file name search.
#[derive(Debug, Clone, Copy)]
pub struct NoteSearchHit<'a> {
    pub year: &'a AcademicYear,
    pub semester: &'a Semester,
    pub file: &'a UploadedFile,
}

/// Exclusive owner of the notes catalog.
pub struct NotesStore<S: SlotRepository> {
    slots: S,
    catalog: NotesData,
}

impl<S: SlotRepository> NotesStore<S> {
    /// Opens the store, loading persisted state from the injected slots.
    ///
    /// Missing state yields the default seed; malformed state is logged
    /// and replaced by the seed.
    pub fn open(slots: S) -> PersistResult<Self> {
        let catalog = match slots.read_slot(NOTES_SLOT_KEY)? {
            None => NotesData::seed(),
            Some(payload) => match serde_json::from_str::<NotesData>(&payload) {
                Ok(catalog) => catalog,
                Err(err) => {
                    warn!(
                        "event=notes_load module=store status=recovered reason=invalid_json:{err}"
                    );
                    NotesData::seed()
                }
            },
        };

        info!(
            "event=notes_load module=store status=ok years={}",
            catalog.years.len()
        );
        Ok(Self { slots, catalog })
    }

    /// Academic years in catalog order.
    pub fn years(&self) -> &[AcademicYear] {
        &self.catalog.years
    }

    /// Appends a file to the matching semester. Returns whether it was
    /// added; unknown year/semester ids are no-ops.
    pub fn add_file(
        &mut self,
        year_id: &str,
        semester_id: &str,
        file: UploadedFile,
    ) -> PersistResult<bool> {
        let file_id = file.id;
        let Some(semester) = self.semester_mut(year_id, semester_id) else {
            debug!(
                "event=note_add module=store status=noop year={year_id} semester={semester_id}"
            );
            return Ok(false);
        };

        semester.files.push(file);
        self.persist()?;

        info!(
            "event=note_add module=store status=ok year={year_id} semester={semester_id} file={file_id}"
        );
        Ok(true)
    }

    /// Removes a file from the matching semester. Returns whether anything
    /// was removed.
    pub fn delete_file(
        &mut self,
        year_id: &str,
        semester_id: &str,
        file_id: FileId,
    ) -> PersistResult<bool> {
        let Some(semester) = self.semester_mut(year_id, semester_id) else {
            debug!(
                "event=note_delete module=store status=noop year={year_id} semester={semester_id}"
            );
            return Ok(false);
        };

        let before = semester.files.len();
        semester.files.retain(|file| file.id != file_id);
        if semester.files.len() == before {
            debug!("event=note_delete module=store status=noop file={file_id}");
            return Ok(false);
        }

        self.persist()?;
        info!(
            "event=note_delete module=store status=ok year={year_id} semester={semester_id} file={file_id}"
        );
        Ok(true)
    }

    /// Count of files across all years and semesters.
    pub fn total_files(&self) -> usize {
        self.catalog
            .years
            .iter()
            .flat_map(|year| &year.semesters)
            .map(|semester| semester.files.len())
            .sum()
    }

    /// Case-insensitive substring search over file names.
    pub fn search_files(&self, query: &str) -> Vec<NoteSearchHit<'_>> {
        let needle = query.to_lowercase();
        let mut hits = Vec::new();

        for year in &self.catalog.years {
            for semester in &year.semesters {
                for file in &semester.files {
                    if file.name.to_lowercase().contains(&needle) {
                        hits.push(NoteSearchHit {
                            year,
                            semester,
                            file,
                        });
                    }
                }
            }
        }

        hits
    }

    fn semester_mut(&mut self, year_id: &str, semester_id: &str) -> Option<&mut Semester> {
        self.catalog
            .years
            .iter_mut()
            .find(|year| year.id == year_id)?
            .semesters
            .iter_mut()
            .find(|semester| semester.id == semester_id)
    }

    fn persist(&self) -> PersistResult<()> {
        let payload = serde_json::to_string(&self.catalog)?;
        self.slots.write_slot(NOTES_SLOT_KEY, &payload)
    }
}
