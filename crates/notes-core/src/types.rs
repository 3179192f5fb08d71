//! Core data types for the notes service.
//!
//! A note is three fields: a backend-assigned integer id, a short title and
//! free-form content. All types derive `Debug` and `Clone`; the wire types
//! also derive `Serialize`/`Deserialize` so the server and the CLI share one
//! JSON shape.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Maximum title length in characters, matching the `VARCHAR(100)` column.
pub const TITLE_MAX_CHARS: usize = 100;

// ============================================================================
// ID Types
// ============================================================================

/// Identifier of a persisted note.
///
/// Assigned by the storage backend on insert and never reused after the note
/// is deleted. Valid ids are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub i64);

impl NoteId {
    /// Creates a NoteId from a raw integer, rejecting zero and negatives.
    pub fn new(raw: i64) -> Result<Self, InvalidNoteId> {
        if raw > 0 {
            Ok(Self(raw))
        } else {
            Err(InvalidNoteId(raw.to_string()))
        }
    }

    /// Returns the inner integer.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = InvalidNoteId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: i64 = s.parse().map_err(|_| InvalidNoteId(s.to_string()))?;
        Self::new(raw)
    }
}

/// A value that cannot be interpreted as a [`NoteId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid note id: {0:?}")]
pub struct InvalidNoteId(pub String);

// ============================================================================
// Note
// ============================================================================

/// A persisted note, serialized as `{id, title, content}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
}

// ============================================================================
// Draft
// ============================================================================

/// Reasons a request payload is rejected as a note draft.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    /// Body is not valid JSON.
    #[error("malformed JSON body: {0}")]
    Malformed(String),

    /// Body is valid JSON but not an object.
    #[error("payload must be a JSON object")]
    NotAnObject,

    /// A required field is absent.
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    /// A required field is present but not a string.
    #[error("field `{0}` must be a string")]
    WrongType(&'static str),

    /// Title is empty or whitespace only.
    #[error("title must not be empty")]
    EmptyTitle,

    /// Title exceeds [`TITLE_MAX_CHARS`].
    #[error("title is {len} characters, maximum is {max}")]
    TitleTooLong { len: usize, max: usize },
}

/// A validated `{title, content}` pair.
///
/// Fields are private so a draft can only be obtained through validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    title: String,
    content: String,
}

impl NoteDraft {
    /// Build a draft, enforcing the title constraints. Content may be empty.
    ///
    /// The title must contain a non-whitespace character and be at most
    /// [`TITLE_MAX_CHARS`] characters. This is stricter than the storage
    /// layer: SQLite does not enforce the `VARCHAR(100)` length, and a
    /// whitespace-only string satisfies `NOT NULL`, so both are rejected here
    /// instead. The title is stored as given, surrounding whitespace included.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Result<Self, DraftError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DraftError::EmptyTitle);
        }

        let len = title.chars().count();
        if len > TITLE_MAX_CHARS {
            return Err(DraftError::TitleTooLong {
                len,
                max: TITLE_MAX_CHARS,
            });
        }

        Ok(Self {
            title,
            content: content.into(),
        })
    }

    /// Parse a raw request body.
    ///
    /// The body must be a JSON object whose `title` and `content` members are
    /// both strings. Other members are ignored.
    pub fn from_json(body: &[u8]) -> Result<Self, DraftError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| DraftError::Malformed(e.to_string()))?;
        let object = value.as_object().ok_or(DraftError::NotAnObject)?;

        let title = string_field(object, "title")?;
        let content = string_field(object, "content")?;

        Self::new(title, content)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Attach a backend-assigned id, producing the persisted form.
    #[must_use]
    pub fn into_note(self, id: NoteId) -> Note {
        Note {
            id,
            title: self.title,
            content: self.content,
        }
    }
}

fn string_field(object: &Map<String, Value>, name: &'static str) -> Result<String, DraftError> {
    match object.get(name) {
        None => Err(DraftError::MissingField(name)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(DraftError::WrongType(name)),
    }
}

// ============================================================================
// Tests
// ============================================================================
