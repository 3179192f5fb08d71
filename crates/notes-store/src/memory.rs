//! In-memory repository for tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use notes_core::{Note, NoteDraft, NoteId};
use tokio::sync::Mutex;

use crate::error::StoreResult;
use crate::repository::NoteRepository;

/// Map-backed [`NoteRepository`].
///
/// Ids come from a counter that only increases, so deleted ids are never
/// handed out again. Listing returns notes in id order.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    state: Mutex<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    notes: BTreeMap<NoteId, Note>,
    last_id: i64,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteRepository for MemoryRepository {
    async fn insert(&self, draft: &NoteDraft) -> StoreResult<Note> {
        let mut state = self.state.lock().await;
        state.last_id += 1;
        let note = draft.clone().into_note(NoteId(state.last_id));
        state.notes.insert(note.id, note.clone());
        Ok(note)
    }

    async fn get(&self, id: NoteId) -> StoreResult<Option<Note>> {
        Ok(self.state.lock().await.notes.get(&id).cloned())
    }

    async fn list(&self) -> StoreResult<Vec<Note>> {
        Ok(self.state.lock().await.notes.values().cloned().collect())
    }

    async fn update(&self, id: NoteId, draft: &NoteDraft) -> StoreResult<Option<Note>> {
        let mut state = self.state.lock().await;
        Ok(state.notes.get_mut(&id).map(|note| {
            note.title = draft.title().to_string();
            note.content = draft.content().to_string();
            note.clone()
        }))
    }

    async fn delete(&self, id: NoteId) -> StoreResult<bool> {
        Ok(self.state.lock().await.notes.remove(&id).is_some())
    }
}
