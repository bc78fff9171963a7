//! Note repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `notes` table.
//! - Own keyword and creation-day filtering for list queries.
//!
//! # Invariants
//! - Write paths call `NoteDraft::validate()` before SQL mutations.
//! - Read paths reject invalid persisted state instead of masking it.
//! - List results are ordered by `created_at DESC, id DESC`.

use crate::db::DbError;
use crate::model::note::{Note, NoteDraft, NoteId, NoteKind, NoteValidationError};
use crate::query::date_input::DateQuery;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const NOTE_SELECT_SQL: &str = "SELECT
    id,
    type,
    content,
    description,
    created_at,
    updated_at
FROM notes";

const NOTES_DEFAULT_LIMIT: u32 = 20;
const NOTES_LIMIT_MAX: u32 = 100;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for note persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(NoteValidationError),
    Db(DbError),
    NotFound(NoteId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted note data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<NoteValidationError> for RepoError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Query options for listing notes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteListQuery {
    /// Case-insensitive substring matched against content or description.
    pub keyword: Option<String>,
    /// Creation-day filter, `[day, day+1)` over `created_at`.
    pub day: Option<DateQuery>,
    /// Maximum rows to return. Defaults to 20 and clamps to 100.
    pub limit: Option<u32>,
    /// Number of rows to skip.
    pub offset: u32,
}

/// Repository interface for note CRUD operations.
pub trait NoteRepository {
    /// Persists one draft and returns the store-assigned id.
    fn create_note(&self, draft: &NoteDraft) -> RepoResult<NoteId>;
    /// Gets one note by id.
    fn get_note(&self, id: NoteId) -> RepoResult<Option<Note>>;
    /// Lists notes using keyword/day filters and pagination.
    fn list_notes(&self, query: &NoteListQuery) -> RepoResult<Vec<Note>>;
    /// Removes one note by id.
    fn delete_note(&self, id: NoteId) -> RepoResult<()>;
}

/// SQLite-backed note repository.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn create_note(&self, draft: &NoteDraft) -> RepoResult<NoteId> {
        draft.validate()?;

        self.conn.execute(
            "INSERT INTO notes (type, content, description) VALUES (?1, ?2, ?3);",
            params![
                note_kind_to_db(draft.kind),
                draft.content.as_str(),
                draft.description.as_deref(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_note(&self, id: NoteId) -> RepoResult<Option<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_note_row(row)?));
        }

        Ok(None)
    }

    fn list_notes(&self, query: &NoteListQuery) -> RepoResult<Vec<Note>> {
        let mut sql = format!("{NOTE_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(keyword) = query.keyword.as_deref() {
            let pattern = like_substring_pattern(keyword);
            sql.push_str(
                " AND (LOWER(content) LIKE ? ESCAPE '\\'
                    OR LOWER(description) LIKE ? ESCAPE '\\')",
            );
            bind_values.push(Value::Text(pattern.clone()));
            bind_values.push(Value::Text(pattern));
        }

        if let Some(day) = query.day {
            sql.push_str(" AND created_at >= ? AND created_at < ?");
            bind_values.push(Value::Integer(day.start_millis()));
            bind_values.push(Value::Integer(day.end_millis()));
        }

        sql.push_str(" ORDER BY created_at DESC, id DESC");

        let limit = normalize_note_limit(query.limit);
        sql.push_str(" LIMIT ?");
        bind_values.push(Value::Integer(i64::from(limit)));
        if query.offset > 0 {
            sql.push_str(" OFFSET ?");
            bind_values.push(Value::Integer(i64::from(query.offset)));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut notes = Vec::new();

        while let Some(row) = rows.next()? {
            notes.push(parse_note_row(row)?);
        }

        Ok(notes)
    }

    fn delete_note(&self, id: NoteId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

/// Normalizes list limit according to the notes contract.
pub fn normalize_note_limit(limit: Option<u32>) -> u32 {
    match limit {
        Some(0) => NOTES_DEFAULT_LIMIT,
        Some(value) if value > NOTES_LIMIT_MAX => NOTES_LIMIT_MAX,
        Some(value) => value,
        None => NOTES_DEFAULT_LIMIT,
    }
}

/// Builds a lowercased `%keyword%` pattern with LIKE wildcards escaped,
/// so `50%` in user input matches the literal text.
///
/// Lowercasing is ASCII-only to stay consistent with SQLite's `LOWER()`.
fn like_substring_pattern(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len() + 2);
    escaped.push('%');
    for ch in keyword.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch.to_ascii_lowercase());
    }
    escaped.push('%');
    escaped
}

fn parse_note_row(row: &Row<'_>) -> RepoResult<Note> {
    let type_text: String = row.get("type")?;
    let kind = parse_note_kind(&type_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid note type `{type_text}` in notes.type"))
    })?;

    let content: String = row.get("content")?;
    if content.is_empty() {
        let id: NoteId = row.get("id")?;
        return Err(RepoError::InvalidData(format!(
            "empty content in notes row {id}"
        )));
    }

    Ok(Note {
        id: row.get("id")?,
        kind,
        content,
        description: row.get("description")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn note_kind_to_db(kind: NoteKind) -> &'static str {
    match kind {
        NoteKind::Text => "text",
        NoteKind::Image => "image",
    }
}

fn parse_note_kind(value: &str) -> Option<NoteKind> {
    match value {
        "text" => Some(NoteKind::Text),
        "image" => Some(NoteKind::Image),
        _ => None,
    }
}
