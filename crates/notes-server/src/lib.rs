//! notes-server: HTTP API server for the notes service
//!
//! This crate provides:
//! - [`NoteService`], the create/list/get/update/delete operations with
//!   payload validation and typed errors
//! - REST endpoints under `/notes` plus `/health`
//! - JSON error responses of the form `{"error": "..."}`
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//!
//! The storage backend is injected as an `Arc<dyn NoteRepository>` through
//! [`AppState`]; nothing else is shared between requests.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use notes_server::{app::build_app, AppState, ServerConfig};
//! use notes_store::{Store, StoreConfig};
//!
//! let store = Store::connect(StoreConfig::from_env()?).await?;
//! let state = AppState::new(Arc::new(store), ServerConfig::from_env()?);
//! let app = build_app(state);
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod service;
pub mod state;

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use service::{NoteService, ServiceError};
pub use state::AppState;

// Re-export dependent crates
pub use notes_core;
pub use notes_store;
