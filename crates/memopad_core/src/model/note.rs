//! Note domain model.
//!
//! # Responsibility
//! - Define the persisted note record and the client-side creation draft.
//! - Own write-path validation for content and description limits.
//!
//! # Invariants
//! - `id` is assigned by the store and stable for the note lifetime.
//! - `content` is never empty; the store persists user payloads untrimmed.
//! - `description`, when present, holds at most [`DESCRIPTION_MAX_CHARS`]
//!   characters.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned numeric identifier for a note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = i64;

/// Maximum description length in characters (not bytes).
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Payload category of a note.
///
/// Image notes carry a base64-encoded payload in `content`; the core treats
/// it as an opaque string and never decodes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteKind {
    /// Plain text body.
    Text,
    /// Base64-encoded image payload.
    Image,
}

/// Canonical persisted note record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Store-assigned identity.
    pub id: NoteId,
    /// Serialized as `type` to match external schema naming.
    #[serde(rename = "type")]
    pub kind: NoteKind,
    /// Text body or base64 image payload. Never empty.
    pub content: String,
    /// Free-text caption. Meaningful mostly for image notes.
    pub description: Option<String>,
    /// Store-assigned creation timestamp, Unix epoch milliseconds.
    pub created_at: i64,
    /// Store-assigned update timestamp, Unix epoch milliseconds.
    pub updated_at: i64,
}

/// Client-supplied payload for note creation.
///
/// Identity and timestamps are assigned by the store, so creation flows
/// carry a draft instead of a full [`Note`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    /// Serialized as `type` to match external schema naming.
    #[serde(rename = "type")]
    pub kind: NoteKind,
    pub content: String,
    pub description: Option<String>,
}

/// Validation failure for a note draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteValidationError {
    /// `content` is the empty string.
    EmptyContent,
    /// `description` exceeds [`DESCRIPTION_MAX_CHARS`].
    DescriptionTooLong { length: usize },
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContent => write!(f, "note content cannot be empty"),
            Self::DescriptionTooLong { length } => write!(
                f,
                "note description has {length} characters; maximum is {DESCRIPTION_MAX_CHARS}"
            ),
        }
    }
}

impl Error for NoteValidationError {}

impl NoteDraft {
    /// Creates a text note draft.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: NoteKind::Text,
            content: content.into(),
            description: None,
        }
    }

    /// Creates an image note draft with an optional caption.
    pub fn image(content: impl Into<String>, description: Option<String>) -> Self {
        Self {
            kind: NoteKind::Image,
            content: content.into(),
            description,
        }
    }

    /// Checks draft invariants before persistence.
    ///
    /// # Errors
    /// - [`NoteValidationError::EmptyContent`] when `content` is empty.
    /// - [`NoteValidationError::DescriptionTooLong`] when the description
    ///   exceeds the character cap.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        if self.content.is_empty() {
            return Err(NoteValidationError::EmptyContent);
        }

        if let Some(description) = self.description.as_deref() {
            let length = description.chars().count();
            if length > DESCRIPTION_MAX_CHARS {
                return Err(NoteValidationError::DescriptionTooLong { length });
            }
        }

        Ok(())
    }
}
