//! API error types with JSON responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use notes_core::{DraftError, NoteId};
use notes_store::StoreError;
use serde::{Deserialize, Serialize};

use crate::service::ServiceError;

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request body is not a valid note payload (400).
    #[error("invalid data: {0}")]
    InvalidData(#[from] DraftError),

    /// Path segment is not a note id (400).
    #[error("invalid note id: {0}")]
    InvalidId(String),

    /// No such note (404).
    #[error("note {0} not found")]
    NotFound(NoteId),

    /// Store error (500).
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidData(e) => Self::InvalidData(e),
            ServiceError::NotFound(id) => Self::NotFound(id),
            ServiceError::Store(e) => Self::Store(e),
        }
    }
}

impl ApiError {
    /// Get the error code string for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidData(_) => "INVALID_DATA",
            Self::InvalidId(_) => "INVALID_ID",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Store(_) => "STORAGE_ERROR",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidData(_) | Self::InvalidId(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the response body.
    ///
    /// Detail stays in the logs; clients get a fixed string per kind.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::InvalidData(_) => "Invalid data",
            Self::InvalidId(_) => "Invalid note ID",
            Self::NotFound(_) => "Note not found",
            Self::Store(_) => "Internal server error",
        }
    }
}

/// JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(code = self.code(), error = %self, "Request failed");
        } else {
            tracing::debug!(code = self.code(), error = %self, "Request rejected");
        }

        let body = ErrorResponse {
            error: self.public_message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
