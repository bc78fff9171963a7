//! Note use-case service.
//!
//! # Responsibility
//! - Provide create/list/delete APIs over the note repository.
//! - Resolve free-text date expressions into creation-day filters.
//!
//! # Invariants
//! - Created notes are read back so callers always see store-assigned
//!   id and timestamps.
//! - An unrecognized date expression is reported to the caller, never
//!   silently dropped from the filter.
//! - Note list is always sorted by `created_at DESC, id DESC`.

use crate::model::note::{Note, NoteDraft, NoteId, NoteKind, NoteValidationError};
use crate::query::date_input::DateQuery;
use crate::repo::note_repo::{
    normalize_note_limit, NoteListQuery, NoteRepository, RepoError, RepoResult,
};
use chrono::NaiveDate;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// Draft failed content/description validation.
    InvalidNote(NoteValidationError),
    /// Date expression matched no recognized shape.
    UnrecognizedDateInput(String),
    /// Target note does not exist.
    NoteNotFound(NoteId),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNote(err) => write!(f, "{err}"),
            Self::UnrecognizedDateInput(input) => {
                write!(f, "unrecognized date expression: `{input}`")
            }
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent note state: {details}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidNote(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for NoteServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::InvalidNote(err),
            RepoError::NotFound(id) => Self::NoteNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// List request carrying raw user filter input.
///
/// `today` is injected by the caller so date resolution stays deterministic;
/// only its calendar year is consulted by the parser.
#[derive(Debug, Clone)]
pub struct NoteQuery {
    /// Raw keyword input; blank values disable the keyword filter.
    pub keyword: Option<String>,
    /// Raw date expression, resolved via the date-input parser.
    pub date_input: Option<String>,
    /// Evaluation date for year inference.
    pub today: NaiveDate,
    /// Maximum rows to return. Defaults to 20 and clamps to 100.
    pub limit: Option<u32>,
    /// Number of rows to skip.
    pub offset: u32,
}

impl NoteQuery {
    /// Creates an unfiltered query evaluated against `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            keyword: None,
            date_input: None,
            today,
            limit: None,
            offset: 0,
        }
    }
}

/// List result envelope used by service callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesListResult {
    /// List items sorted by `created_at DESC, id DESC`.
    pub items: Vec<Note>,
    /// Effective normalized limit used by the query.
    pub applied_limit: u32,
    /// Calendar day the date expression resolved to, if one was given.
    pub resolved_day: Option<NaiveDate>,
}

/// Note service facade over repository implementations.
pub struct NoteService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one note and returns the stored record.
    ///
    /// The store assigns id and timestamps, so the persisted row is read
    /// back instead of echoing the draft.
    pub fn create_note(
        &self,
        kind: NoteKind,
        content: impl Into<String>,
        description: Option<String>,
    ) -> Result<Note, NoteServiceError> {
        let draft = NoteDraft {
            kind,
            content: content.into(),
            description,
        };

        let id = self.repo.create_note(&draft)?;
        info!("event=note_create module=service status=ok id={id}");

        self.repo
            .get_note(id)?
            .ok_or(NoteServiceError::InconsistentState(
                "created note not found in read-back",
            ))
    }

    /// Gets one note by id.
    pub fn get_note(&self, id: NoteId) -> RepoResult<Option<Note>> {
        self.repo.get_note(id)
    }

    /// Lists notes matching the raw filter input.
    ///
    /// # Errors
    /// - [`NoteServiceError::UnrecognizedDateInput`] when a date expression
    ///   is present but matches no recognized shape. Interactive callers are
    ///   expected to show the message and let the user retry.
    pub fn list_notes(&self, query: &NoteQuery) -> Result<NotesListResult, NoteServiceError> {
        let keyword = query
            .keyword
            .as_deref()
            .map(str::trim)
            .filter(|keyword| !keyword.is_empty())
            .map(str::to_string);

        let day = match query.date_input.as_deref() {
            Some(input) => Some(DateQuery::parse(input, query.today).ok_or_else(|| {
                NoteServiceError::UnrecognizedDateInput(input.to_string())
            })?),
            None => None,
        };

        let applied_limit = normalize_note_limit(query.limit);
        let items = self.repo.list_notes(&NoteListQuery {
            keyword,
            day,
            limit: Some(applied_limit),
            offset: query.offset,
        })?;

        Ok(NotesListResult {
            items,
            applied_limit,
            resolved_day: day.map(|date_query| date_query.day()),
        })
    }

    /// Deletes one note by id.
    ///
    /// # Errors
    /// - [`NoteServiceError::NoteNotFound`] when no note has this id.
    pub fn delete_note(&self, id: NoteId) -> Result<(), NoteServiceError> {
        self.repo.delete_note(id)?;
        info!("event=note_delete module=service status=ok id={id}");
        Ok(())
    }
}
