//! Note service: the five CRUD operations over the injected repository.
//!
//! Each operation is one round trip through the repository and holds no
//! state between calls. Payloads arrive as raw bytes so the service decides
//! when validation happens relative to the existence check.

use std::sync::Arc;

use notes_core::{DraftError, Note, NoteDraft, NoteId};
use notes_store::{NoteRepository, StoreError};

/// Errors produced by [`NoteService`].
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Payload missing `title`/`content`, wrongly typed, or failing title rules.
    #[error("invalid data: {0}")]
    InvalidData(#[from] DraftError),

    /// No note with this id.
    #[error("note {0} not found")]
    NotFound(NoteId),

    /// Storage backend failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// CRUD operations over notes.
#[derive(Clone)]
pub struct NoteService {
    repo: Arc<dyn NoteRepository>,
}

impl NoteService {
    pub fn new(repo: Arc<dyn NoteRepository>) -> Self {
        Self { repo }
    }

    /// Validate `payload` and persist it as a new note.
    ///
    /// Nothing is written when validation fails.
    pub async fn create(&self, payload: &[u8]) -> ServiceResult<Note> {
        let draft = NoteDraft::from_json(payload)?;
        let note = self.repo.insert(&draft).await?;

        tracing::info!(note_id = %note.id, "Note created");
        Ok(note)
    }

    /// All persisted notes.
    pub async fn list(&self) -> ServiceResult<Vec<Note>> {
        let notes = self.repo.list().await?;
        tracing::debug!(count = notes.len(), "Listed notes");
        Ok(notes)
    }

    pub async fn get(&self, id: NoteId) -> ServiceResult<Note> {
        self.repo.get(id).await?.ok_or(ServiceError::NotFound(id))
    }

    /// Overwrite title and content of an existing note.
    ///
    /// The note must exist before the payload is looked at: a malformed
    /// payload aimed at a missing id reports `NotFound`, not `InvalidData`.
    pub async fn update(&self, id: NoteId, payload: &[u8]) -> ServiceResult<Note> {
        if self.repo.get(id).await?.is_none() {
            return Err(ServiceError::NotFound(id));
        }

        let draft = NoteDraft::from_json(payload)?;

        // A concurrent delete may land between the lookup and the write.
        let note = self
            .repo
            .update(id, &draft)
            .await?
            .ok_or(ServiceError::NotFound(id))?;

        tracing::info!(note_id = %id, "Note updated");
        Ok(note)
    }

    pub async fn delete(&self, id: NoteId) -> ServiceResult<()> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::NotFound(id));
        }

        tracing::info!(note_id = %id, "Note deleted");
        Ok(())
    }
}

impl std::fmt::Debug for NoteService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoteService").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use notes_store::{MemoryRepository, StoreResult};

    fn service() -> NoteService {
        NoteService::new(Arc::new(MemoryRepository::new()))
    }

    /// Finds every note on lookup but loses it before the write, as when a
    /// delete commits between the two statements.
    struct DeletedMidUpdate;

    #[async_trait]
    impl NoteRepository for DeletedMidUpdate {
        async fn insert(&self, draft: &NoteDraft) -> StoreResult<Note> {
            Ok(draft.clone().into_note(NoteId(1)))
        }

        async fn get(&self, id: NoteId) -> StoreResult<Option<Note>> {
            Ok(Some(Note {
                id,
                title: "Shopping".to_string(),
                content: "Milk, eggs".to_string(),
            }))
        }

        async fn list(&self) -> StoreResult<Vec<Note>> {
            Ok(Vec::new())
        }

        async fn update(&self, _id: NoteId, _draft: &NoteDraft) -> StoreResult<Option<Note>> {
            Ok(None)
        }

        async fn delete(&self, _id: NoteId) -> StoreResult<bool> {
            Ok(false)
        }
    }

    const SHOPPING: &[u8] = br#"{"title": "Shopping", "content": "Milk, eggs"}"#;

    #[tokio::test]
    async fn test_create_then_get() {
        let service = service();
        let created = service.create(SHOPPING).await.unwrap();
        assert_eq!(created.id, NoteId(1));

        let fetched = service.get(created.id).await.unwrap();
        assert_eq!(fetched.title, "Shopping");
        assert_eq!(fetched.content, "Milk, eggs");
    }

    #[tokio::test]
    async fn test_invalid_create_persists_nothing() {
        let service = service();
        let err = service.create(br#"{"title": "No content"}"#).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::InvalidData(DraftError::MissingField("content"))
        ));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_grows_by_number_created() {
        let service = service();
        let before = service.list().await.unwrap().len();
        for _ in 0..4 {
            service.create(SHOPPING).await.unwrap();
        }
        assert_eq!(service.list().await.unwrap().len(), before + 4);
    }

    #[tokio::test]
    async fn test_update_is_idempotent() {
        let service = service();
        let id = service.create(SHOPPING).await.unwrap().id;
        let payload = br#"{"title": "Shopping", "content": "Milk, eggs, bread"}"#;

        let once = service.update(id, payload).await.unwrap();
        let twice = service.update(id, payload).await.unwrap();
        assert_eq!(once, twice);
        assert_eq!(service.get(id).await.unwrap(), twice);
        assert_eq!(twice.content, "Milk, eggs, bread");
    }

    #[tokio::test]
    async fn test_update_checks_existence_before_payload() {
        let service = service();

        let err = service.update(NoteId(77), b"not json").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(NoteId(77))));

        let id = service.create(SHOPPING).await.unwrap().id;
        let err = service.update(id, br#"{"title": "x"}"#).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidData(_)));
        assert_eq!(service.get(id).await.unwrap().content, "Milk, eggs");
    }

    #[tokio::test]
    async fn test_update_of_note_deleted_mid_flight_is_not_found() {
        let service = NoteService::new(Arc::new(DeletedMidUpdate));

        let err = service.update(NoteId(5), SHOPPING).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(NoteId(5))));
    }

    #[tokio::test]
    async fn test_delete_is_final() {
        let service = service();
        let id = service.create(SHOPPING).await.unwrap().id;

        service.delete(id).await.unwrap();
        assert!(matches!(
            service.get(id).await.unwrap_err(),
            ServiceError::NotFound(_)
        ));
        assert!(matches!(
            service.delete(id).await.unwrap_err(),
            ServiceError::NotFound(_)
        ));
    }
}
