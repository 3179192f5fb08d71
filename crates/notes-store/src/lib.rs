//! notes-store: Storage layer for the notes service
//!
//! This crate provides:
//! - The [`NoteRepository`] trait, the only surface the service talks to
//! - [`Store`], a SQLite implementation backed by an sqlx connection pool
//! - [`MemoryRepository`], an in-process implementation for tests
//! - Schema bootstrap for the `notes` table
//!
//! # Usage
//!
//! ```rust,ignore
//! use notes_store::{NoteRepository, Store, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = Store::connect(config).await?;
//!
//! let note = store.insert(&draft).await?;
//! let all = store.list().await?;
//! ```

pub mod error;
pub mod memory;
pub mod models;
pub mod repository;
pub mod schema;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryRepository;
pub use models::NoteRow;
pub use repository::NoteRepository;
pub use store::{Store, StoreConfig};

// Re-export notes-core for downstream crates
pub use notes_core;
