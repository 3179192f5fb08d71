//! Note CRUD routes.
//!
//! - POST /notes - Create a note
//! - GET /notes - List all notes
//! - GET /notes/{id} - Fetch one note
//! - PUT /notes/{id} - Replace title and content
//! - DELETE /notes/{id} - Delete a note
//!
//! Bodies are taken as raw bytes and validated by the service, so a bad
//! payload always produces `{"error": "Invalid data"}` rather than an
//! extractor rejection.

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    routing::get,
};
use notes_core::{Note, NoteId};
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::extract::NoteIdPath;
use crate::state::AppState;

/// Confirmation message returned by POST /notes.
pub const NOTE_CREATED_MESSAGE: &str = "Note created.";

/// Confirmation message returned by DELETE /notes/{id}.
pub const NOTE_DELETED_MESSAGE: &str = "Note deleted";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Response for POST /notes.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateNoteResponse {
    /// Id assigned to the new note.
    pub note_id: NoteId,
    pub message: String,
}

/// Response for DELETE /notes/{id}.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteNoteResponse {
    pub message: String,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /notes - Create a note.
///
/// # Request
///
/// Body: `{ "title": "...", "content": "..." }`
///
/// # Response
///
/// - 200 OK: `{ "note_id": 1, "message": "Note created." }`
/// - 400 Bad Request: `{ "error": "Invalid data" }`
async fn create_note(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<CreateNoteResponse>> {
    let note = state.notes().create(&body).await?;

    Ok(Json(CreateNoteResponse {
        note_id: note.id,
        message: NOTE_CREATED_MESSAGE.to_string(),
    }))
}

/// GET /notes - List all notes as `[{id, title, content}, ...]`.
async fn list_notes(State(state): State<AppState>) -> ApiResult<Json<Vec<Note>>> {
    Ok(Json(state.notes().list().await?))
}

/// GET /notes/{id} - Fetch one note.
///
/// # Response
///
/// - 200 OK: `{ "id": 1, "title": "...", "content": "..." }`
/// - 400 Bad Request: `{ "error": "Invalid note ID" }`
/// - 404 Not Found: `{ "error": "Note not found" }`
async fn get_note(
    State(state): State<AppState>,
    NoteIdPath(id): NoteIdPath,
) -> ApiResult<Json<Note>> {
    Ok(Json(state.notes().get(id).await?))
}

/// PUT /notes/{id} - Replace title and content.
///
/// A missing note is reported before the body is validated.
///
/// # Response
///
/// - 200 OK: the updated note
/// - 400 Bad Request: `{ "error": "Invalid data" }` or `{ "error": "Invalid note ID" }`
/// - 404 Not Found: `{ "error": "Note not found" }`
async fn update_note(
    State(state): State<AppState>,
    NoteIdPath(id): NoteIdPath,
    body: Bytes,
) -> ApiResult<Json<Note>> {
    Ok(Json(state.notes().update(id, &body).await?))
}

/// DELETE /notes/{id} - Hard-delete a note.
///
/// # Response
///
/// - 200 OK: `{ "message": "Note deleted" }`
/// - 400 Bad Request: `{ "error": "Invalid note ID" }`
/// - 404 Not Found: `{ "error": "Note not found" }`
async fn delete_note(
    State(state): State<AppState>,
    NoteIdPath(id): NoteIdPath,
) -> ApiResult<Json<DeleteNoteResponse>> {
    state.notes().delete(id).await?;

    Ok(Json(DeleteNoteResponse {
        message: NOTE_DELETED_MESSAGE.to_string(),
    }))
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route(
            "/notes/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
}

// ============================================================================
// Tests
// ============================================================================
