//! notes-core: Core types for the notes service.
//!
//! This crate provides:
//! - [`NoteId`], the backend-assigned identifier of a note
//! - [`Note`], a persisted note as it appears on the wire
//! - [`NoteDraft`], a validated `{title, content}` payload ready to be stored
//!
//! Validation happens once, when a draft is built. Anything holding a
//! `NoteDraft` can hand it to the storage layer without re-checking.

pub mod types;

pub use types::{DraftError, InvalidNoteId, Note, NoteDraft, NoteId, TITLE_MAX_CHARS};
