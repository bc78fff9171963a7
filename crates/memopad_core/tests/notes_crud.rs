use memopad_core::db::open_db_in_memory;
use memopad_core::{
    NoteDraft, NoteKind, NoteRepository, NoteService, NoteServiceError, NoteValidationError,
    RepoError, SqliteNoteRepository,
};

#[test]
fn create_text_note_assigns_id_and_timestamps() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let note = service
        .create_note(NoteKind::Text, "buy milk", None)
        .unwrap();

    assert!(note.id >= 1);
    assert_eq!(note.kind, NoteKind::Text);
    assert_eq!(note.content, "buy milk");
    assert_eq!(note.description, None);
    assert!(note.created_at > 0);
    assert!(note.updated_at >= note.created_at);
}

#[test]
fn create_image_note_keeps_payload_and_description() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let note = service
        .create_note(
            NoteKind::Image,
            "aGVsbG8gd29ybGQ=",
            Some("holiday photo".to_string()),
        )
        .unwrap();

    assert_eq!(note.kind, NoteKind::Image);
    assert_eq!(note.content, "aGVsbG8gd29ybGQ=");
    assert_eq!(note.description.as_deref(), Some("holiday photo"));
}

#[test]
fn created_ids_are_distinct_and_increasing() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let first = service.create_note(NoteKind::Text, "first", None).unwrap();
    let second = service.create_note(NoteKind::Text, "second", None).unwrap();
    assert!(second.id > first.id);
}

#[test]
fn empty_content_is_rejected_before_persistence() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let err = service
        .create_note(NoteKind::Text, "", None)
        .unwrap_err();
    match err {
        NoteServiceError::InvalidNote(NoteValidationError::EmptyContent) => {}
        other => panic!("unexpected error: {other}"),
    }

    let repo = SqliteNoteRepository::new(&conn);
    let listed = repo.list_notes(&Default::default()).unwrap();
    assert!(listed.is_empty());
}

#[test]
fn oversized_description_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let err = service
        .create_note(NoteKind::Image, "aGVsbG8=", Some("x".repeat(501)))
        .unwrap_err();
    match err {
        NoteServiceError::InvalidNote(NoteValidationError::DescriptionTooLong { length }) => {
            assert_eq!(length, 501);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn repository_validates_drafts_directly() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteNoteRepository::new(&conn);

    let err = repo.create_note(&NoteDraft::text("")).unwrap_err();
    match err {
        RepoError::Validation(NoteValidationError::EmptyContent) => {}
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn get_note_returns_none_for_unknown_id() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    assert_eq!(service.get_note(42).unwrap(), None);
}

#[test]
fn delete_note_removes_the_row() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let note = service
        .create_note(NoteKind::Text, "to be removed", None)
        .unwrap();
    service.delete_note(note.id).unwrap();

    assert_eq!(service.get_note(note.id).unwrap(), None);
}

#[test]
fn delete_unknown_note_reports_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    let err = service.delete_note(9001).unwrap_err();
    match err {
        NoteServiceError::NoteNotFound(9001) => {}
        other => panic!("unexpected error: {other}"),
    }
}
