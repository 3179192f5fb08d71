//! Custom extractors.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use notes_core::NoteId;

use crate::error::ApiError;

/// Note id taken from the `{id}` path segment.
///
/// Rejects with `InvalidId` (400) when the segment is not a positive
/// integer, instead of axum's plain-text path rejection.
#[derive(Debug, Clone, Copy)]
pub struct NoteIdPath(pub NoteId);

impl<S> FromRequestParts<S> for NoteIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::InvalidId(e.body_text()))?;

        raw.parse::<NoteId>()
            .map(Self)
            .map_err(|e| ApiError::InvalidId(e.0))
    }
}
