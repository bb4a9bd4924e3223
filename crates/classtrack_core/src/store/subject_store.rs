//! Subject store: attendance counters and their mutation rules.
//!
//! # Responsibility
//! - Own the ordered subject collection and apply all counter mutations.
//! - Persist the full collection after every successful mutation.
//!
//! # Invariants
//! - `present <= total` holds for every subject after every operation.
//! - Validation rejections and missing-id mutations are silent no-ops,
//!   never errors.
//! - Malformed persisted state loads as an empty collection.

use crate::model::subject::{
    normalize_name, target_in_range, AttendanceData, Subject, SubjectId, SubjectUpdate,
};
use crate::persist::{PersistResult, SlotRepository};
use log::{debug, info, warn};

/// Storage key for the persisted subject collection.
pub const ATTENDANCE_SLOT_KEY: &str = "attendance-tracker-data";

/// Exclusive owner of all subject records.
///
/// Consumers read subjects through `subjects()`/`get()` and derive view
/// metrics via the projection module; nothing outside the store holds a
/// mutable reference.
pub struct SubjectStore<S: SlotRepository> {
    slots: S,
    subjects: Vec<Subject>,
}

impl<S: SlotRepository> SubjectStore<S> {
    /// Opens the store, loading persisted state from the injected slots.
    ///
    /// A missing slot starts empty. A malformed payload is logged and
    /// discarded, never propagated as a fatal error.
    pub fn open(slots: S) -> PersistResult<Self> {
        let subjects = match slots.read_slot(ATTENDANCE_SLOT_KEY)? {
            None => Vec::new(),
            Some(payload) => match decode_subjects(&payload) {
                Ok(subjects) => subjects,
                Err(reason) => {
                    warn!(
                        "event=attendance_load module=store status=recovered reason={reason}"
                    );
                    Vec::new()
                }
            },
        };

        info!(
            "event=attendance_load module=store status=ok subjects={}",
            subjects.len()
        );
        Ok(Self { slots, subjects })
    }

    /// Subjects in insertion order.
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// Looks up one subject by id.
    pub fn get(&self, id: SubjectId) -> Option<&Subject> {
        self.subjects.iter().find(|subject| subject.id == id)
    }

    /// Adds a subject with zeroed counters and returns its new id.
    ///
    /// Returns `Ok(None)` without mutating when `name` trims to empty or
    /// `target` falls outside `(0, 100]`.
    pub fn add_subject(&mut self, name: &str, target: u32) -> PersistResult<Option<SubjectId>> {
        let Some(name) = normalize_name(name) else {
            debug!("event=subject_add module=store status=rejected reason=empty_name");
            return Ok(None);
        };
        if !target_in_range(target) {
            debug!(
                "event=subject_add module=store status=rejected reason=target_out_of_range target={target}"
            );
            return Ok(None);
        }

        let subject = Subject::new(name, target);
        let id = subject.id;
        self.subjects.push(subject);
        self.persist()?;

        info!("event=subject_add module=store status=ok id={id} target={target}");
        Ok(Some(id))
    }

    /// Removes the matching subject. Returns whether anything was removed.
    pub fn delete_subject(&mut self, id: SubjectId) -> PersistResult<bool> {
        let before = self.subjects.len();
        self.subjects.retain(|subject| subject.id != id);
        if self.subjects.len() == before {
            debug!("event=subject_delete module=store status=noop id={id}");
            return Ok(false);
        }

        self.persist()?;
        info!("event=subject_delete module=store status=ok id={id}");
        Ok(true)
    }

    /// Merges provided fields into the matching subject.
    ///
    /// Counters, id and creation time are never touched. Empty-name or
    /// out-of-range target requests are rejected without mutating; a
    /// missing id or an empty request is a no-op. Returns whether the
    /// subject changed.
    pub fn update_subject(
        &mut self,
        id: SubjectId,
        update: &SubjectUpdate,
    ) -> PersistResult<bool> {
        if update.is_empty() {
            return Ok(false);
        }

        let name = match update.name.as_deref() {
            Some(raw) => match normalize_name(raw) {
                Some(name) => Some(name),
                None => {
                    debug!(
                        "event=subject_update module=store status=rejected id={id} reason=empty_name"
                    );
                    return Ok(false);
                }
            },
            None => None,
        };
        if let Some(target) = update.target {
            if !target_in_range(target) {
                debug!(
                    "event=subject_update module=store status=rejected id={id} reason=target_out_of_range target={target}"
                );
                return Ok(false);
            }
        }

        let Some(subject) = self.subjects.iter_mut().find(|subject| subject.id == id) else {
            debug!("event=subject_update module=store status=noop id={id}");
            return Ok(false);
        };

        if let Some(name) = name {
            subject.name = name;
        }
        if let Some(target) = update.target {
            subject.target = target;
        }

        self.persist()?;
        info!("event=subject_update module=store status=ok id={id}");
        Ok(true)
    }

    /// Records one attended class: `present` and `total` advance together.
    pub fn mark_present(&mut self, id: SubjectId) -> PersistResult<bool> {
        self.mark(id, "mark_present", Subject::mark_present)
    }

    /// Records one missed class: only `total` advances.
    pub fn mark_absent(&mut self, id: SubjectId) -> PersistResult<bool> {
        self.mark(id, "mark_absent", Subject::mark_absent)
    }

    /// Clears the collection and erases the persisted slot.
    pub fn reset_all_data(&mut self) -> PersistResult<()> {
        self.subjects.clear();
        self.slots.clear_slot(ATTENDANCE_SLOT_KEY)?;
        info!("event=attendance_reset module=store status=ok");
        Ok(())
    }

    fn mark(
        &mut self,
        id: SubjectId,
        event: &str,
        apply: impl FnOnce(&mut Subject),
    ) -> PersistResult<bool> {
        let Some(subject) = self.subjects.iter_mut().find(|subject| subject.id == id) else {
            debug!("event={event} module=store status=noop id={id}");
            return Ok(false);
        };

        apply(subject);
        let (present, total) = (subject.present, subject.total);
        self.persist()?;

        info!("event={event} module=store status=ok id={id} present={present} total={total}");
        Ok(true)
    }

    fn persist(&self) -> PersistResult<()> {
        let data = AttendanceData {
            subjects: self.subjects.clone(),
        };
        let payload = serde_json::to_string(&data)?;
        self.slots.write_slot(ATTENDANCE_SLOT_KEY, &payload)
    }
}

fn decode_subjects(payload: &str) -> Result<Vec<Subject>, String> {
    let data: AttendanceData =
        serde_json::from_str(payload).map_err(|err| format!("invalid_json:{err}"))?;

    // A payload that parses but violates field invariants is treated the
    // same as a corrupt one: discard and start empty.
    for subject in &data.subjects {
        subject
            .validate()
            .map_err(|err| format!("invalid_subject:{err}"))?;
    }

    Ok(data.subjects)
}
