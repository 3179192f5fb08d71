//! GET /health: liveness plus a round trip through the note store.

use axum::{Json, Router, extract::State, routing::get};
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::state::AppState;

/// Reported while the store answers queries.
pub const STATUS_OK: &str = "ok";

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Number of notes currently stored.
    pub notes: usize,
}

/// A store failure surfaces as 500 `{"error": "Internal server error"}`.
async fn health_check(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    let notes = state.notes().list().await?.len();

    Ok(Json(HealthResponse {
        status: STATUS_OK.to_string(),
        notes,
    }))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
