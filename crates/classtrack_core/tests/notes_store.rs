use classtrack_core::db::{open_db, open_db_in_memory};
use classtrack_core::persist::SlotRepository;
use classtrack_core::{
    NotesStore, SqliteSlotRepository, UploadedFile, NOTES_SLOT_KEY,
};
use uuid::Uuid;

fn pdf(name: &str) -> UploadedFile {
    UploadedFile::new(name, 2048, "application/pdf", "JVBERi0xLjQ=")
}

#[test]
fn fresh_store_loads_default_catalog() {
    let conn = open_db_in_memory().unwrap();
    let store = NotesStore::open(SqliteSlotRepository::new(&conn)).unwrap();

    let years = store.years();
    assert_eq!(years.len(), 4);
    assert_eq!(years[0].id, "first-year");
    assert_eq!(years[0].name, "First Year");
    assert_eq!(years[3].id, "fourth-year");

    for year in years {
        assert_eq!(year.semesters.len(), 2);
        assert!(year.semesters.iter().all(|semester| semester.files.is_empty()));
    }
    assert_eq!(years[1].semesters[0].id, "semester-3");
    assert_eq!(years[3].semesters[1].name, "Eighth Semester");
    assert_eq!(store.total_files(), 0);
}

#[test]
fn add_file_lands_in_the_matching_semester() {
    let conn = open_db_in_memory().unwrap();
    let mut store = NotesStore::open(SqliteSlotRepository::new(&conn)).unwrap();

    let file = pdf("graph-theory.pdf");
    let file_id = file.id;
    assert!(store.add_file("second-year", "semester-3", file).unwrap());

    let semester = &store.years()[1].semesters[0];
    assert_eq!(semester.files.len(), 1);
    assert_eq!(semester.files[0].id, file_id);
    assert_eq!(store.total_files(), 1);
}

#[test]
fn add_file_with_unknown_ids_is_a_noop() {
    let conn = open_db_in_memory().unwrap();
    let mut store = NotesStore::open(SqliteSlotRepository::new(&conn)).unwrap();

    assert!(!store.add_file("fifth-year", "semester-9", pdf("nowhere.pdf")).unwrap());
    assert!(!store.add_file("first-year", "semester-9", pdf("nowhere.pdf")).unwrap());
    assert_eq!(store.total_files(), 0);
}

#[test]
fn delete_file_removes_only_the_matching_file() {
    let conn = open_db_in_memory().unwrap();
    let mut store = NotesStore::open(SqliteSlotRepository::new(&conn)).unwrap();

    let keep = pdf("keep.pdf");
    let drop = pdf("drop.pdf");
    let keep_id = keep.id;
    let drop_id = drop.id;
    store.add_file("first-year", "semester-1", keep).unwrap();
    store.add_file("first-year", "semester-1", drop).unwrap();

    assert!(store.delete_file("first-year", "semester-1", drop_id).unwrap());
    assert!(!store.delete_file("first-year", "semester-1", Uuid::new_v4()).unwrap());

    let files = &store.years()[0].semesters[0].files;
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].id, keep_id);
}

#[test]
fn search_matches_file_names_case_insensitively() {
    let conn = open_db_in_memory().unwrap();
    let mut store = NotesStore::open(SqliteSlotRepository::new(&conn)).unwrap();

    store
        .add_file("first-year", "semester-1", pdf("Calculus Notes.pdf"))
        .unwrap();
    store
        .add_file("third-year", "semester-5", pdf("compiler-notes.pdf"))
        .unwrap();
    store
        .add_file("third-year", "semester-6", pdf("lab-manual.pdf"))
        .unwrap();

    let hits = store.search_files("NOTES");
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].year.id, "first-year");
    assert_eq!(hits[0].semester.id, "semester-1");
    assert_eq!(hits[1].file.name, "compiler-notes.pdf");

    assert!(store.search_files("thermodynamics").is_empty());
}

#[test]
fn catalog_round_trips_through_a_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("classtrack.db");

    let file_id = {
        let conn = open_db(&path).unwrap();
        let mut store = NotesStore::open(SqliteSlotRepository::new(&conn)).unwrap();
        let file = pdf("syllabus.pdf");
        let id = file.id;
        store.add_file("fourth-year", "semester-8", file).unwrap();
        id
    };

    let conn = open_db(&path).unwrap();
    let store = NotesStore::open(SqliteSlotRepository::new(&conn)).unwrap();

    let files = &store.years()[3].semesters[1].files;
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].id, file_id);
    assert_eq!(files[0].name, "syllabus.pdf");
    assert_eq!(files[0].size_bytes, 2048);
    assert_eq!(files[0].kind, "application/pdf");
    assert_eq!(files[0].content, "JVBERi0xLjQ=");
}

#[test]
fn malformed_catalog_payload_recovers_to_seed() {
    let conn = open_db_in_memory().unwrap();
    let slots = SqliteSlotRepository::new(&conn);
    slots.write_slot(NOTES_SLOT_KEY, "<<not json>>").unwrap();

    let store = NotesStore::open(SqliteSlotRepository::new(&conn)).unwrap();
    assert_eq!(store.years().len(), 4);
    assert_eq!(store.total_files(), 0);
}
