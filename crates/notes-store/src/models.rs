//! Database models for the storage layer.
//!
//! Row types map directly to the `notes` table and convert into the
//! domain types from notes-core.

use notes_core::{Note, NoteId};
use sqlx::FromRow;

/// Database row for the `notes` table.
#[derive(Debug, Clone, FromRow)]
pub struct NoteRow {
    pub id: i64,
    pub title: String,
    pub content: String,
}

impl From<NoteRow> for Note {
    fn from(row: NoteRow) -> Self {
        Note {
            id: NoteId(row.id),
            title: row.title,
            content: row.content,
        }
    }
}
