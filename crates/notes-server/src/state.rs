//! Application state shared across handlers.

use std::sync::Arc;

use notes_store::NoteRepository;

use crate::config::ServerConfig;
use crate::service::NoteService;

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// Note operations over the injected repository.
    notes: NoteService,
    /// Server configuration.
    config: Arc<ServerConfig>,
}

impl AppState {
    /// Create new application state around a storage backend.
    pub fn new(repo: Arc<dyn NoteRepository>, config: ServerConfig) -> Self {
        Self {
            notes: NoteService::new(repo),
            config: Arc::new(config),
        }
    }

    /// Get a reference to the note service.
    pub fn notes(&self) -> &NoteService {
        &self.notes
    }

    /// Get a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
