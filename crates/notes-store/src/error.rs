//! Error types for the storage layer.

use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database driver or connection error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema bootstrap failed.
    #[error("schema error: {0}")]
    Schema(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
