//! Repository trait: the storage surface the note service depends on.
//!
//! Handlers hold an `Arc<dyn NoteRepository>`, so the SQLite store and the
//! in-memory double are interchangeable. No sqlx types appear in signatures.

use async_trait::async_trait;
use notes_core::{Note, NoteDraft, NoteId};

use crate::error::StoreResult;
use crate::store::Store;

/// CRUD operations over notes with commit-on-success semantics.
///
/// "Absent" is not an error at this layer: lookups return `Option` and
/// deletes return whether a row was removed. Callers decide what a missing
/// note means.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Persist a new note and return it with its assigned id.
    async fn insert(&self, draft: &NoteDraft) -> StoreResult<Note>;

    /// Fetch a note by id.
    async fn get(&self, id: NoteId) -> StoreResult<Option<Note>>;

    /// All notes. Ordering is implementation-defined.
    async fn list(&self) -> StoreResult<Vec<Note>>;

    /// Overwrite title and content. `None` if the note does not exist.
    async fn update(&self, id: NoteId, draft: &NoteDraft) -> StoreResult<Option<Note>>;

    /// Remove a note. Returns false if it did not exist.
    async fn delete(&self, id: NoteId) -> StoreResult<bool>;
}

#[async_trait]
impl NoteRepository for Store {
    async fn insert(&self, draft: &NoteDraft) -> StoreResult<Note> {
        self.insert_note(draft).await
    }

    async fn get(&self, id: NoteId) -> StoreResult<Option<Note>> {
        self.get_note(id).await
    }

    async fn list(&self) -> StoreResult<Vec<Note>> {
        self.list_notes().await
    }

    async fn update(&self, id: NoteId, draft: &NoteDraft) -> StoreResult<Option<Note>> {
        self.update_note(id, draft).await
    }

    async fn delete(&self, id: NoteId) -> StoreResult<bool> {
        self.delete_note(id).await
    }
}
