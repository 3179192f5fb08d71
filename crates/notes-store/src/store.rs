//! SQLite store implementation.
//!
//! The `Store` type owns the connection pool and performs the CRUD
//! statements for the `notes` table. Every mutation is a single statement
//! and commits on its own.

use std::str::FromStr;

use notes_core::{Note, NoteDraft, NoteId};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::{StoreError, StoreResult};
use crate::models::NoteRow;
use crate::schema;

/// Configuration for connecting to the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Database connection URL.
    pub database_url: String,
    /// Maximum number of connections in the pool.
    pub max_connections: u32,
    /// Minimum number of connections to maintain.
    pub min_connections: u32,
    /// Create the `notes` table on connect if it is missing.
    pub create_schema: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://notes.db".to_string(),
            max_connections: 5,
            min_connections: 1,
            create_schema: true,
        }
    }
}

impl StoreConfig {
    /// Create configuration from environment variables.
    ///
    /// Reads:
    /// - `DATABASE_URL` - Optional, defaults to `sqlite://notes.db`
    /// - `DATABASE_MAX_CONNECTIONS` - Optional, defaults to 5
    /// - `DATABASE_MIN_CONNECTIONS` - Optional, defaults to 1
    /// - `DATABASE_CREATE_SCHEMA` - Optional, defaults to true
    pub fn from_env() -> StoreResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> StoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let database_url = lookup("DATABASE_URL").unwrap_or(defaults.database_url);

        let max_connections = parse_count(&lookup, "DATABASE_MAX_CONNECTIONS")?
            .unwrap_or(defaults.max_connections);

        let min_connections = parse_count(&lookup, "DATABASE_MIN_CONNECTIONS")?
            .unwrap_or(defaults.min_connections);

        if min_connections > max_connections {
            return Err(StoreError::Config(format!(
                "DATABASE_MIN_CONNECTIONS ({}) exceeds DATABASE_MAX_CONNECTIONS ({})",
                min_connections, max_connections
            )));
        }

        let create_schema = lookup("DATABASE_CREATE_SCHEMA")
            .map(|s| s.to_lowercase() != "false" && s != "0")
            .unwrap_or(defaults.create_schema);

        Ok(Self {
            database_url,
            max_connections,
            min_connections,
            create_schema,
        })
    }
}

fn parse_count<F>(lookup: &F, key: &str) -> StoreResult<Option<u32>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => match raw.parse::<u32>() {
            Ok(n) if n > 0 => Ok(Some(n)),
            _ => Err(StoreError::Config(format!(
                "{} must be a positive integer, got {:?}",
                key, raw
            ))),
        },
    }
}

/// SQLite-backed note store.
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Connect to the database with the given configuration.
    ///
    /// The database file is created if it does not exist. The `notes` table
    /// is created when `config.create_schema` is true.
    pub async fn connect(config: StoreConfig) -> StoreResult<Self> {
        tracing::info!("Connecting to database...");

        let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_with(options)
            .await?;

        tracing::info!("Connected to database");

        if config.create_schema {
            schema::ensure_schema(&pool).await?;
        }

        Ok(Self { pool })
    }

    /// Open a private in-memory database with the schema in place.
    ///
    /// The pool is pinned to one connection that never expires, since every
    /// SQLite in-memory connection is its own database.
    pub async fn in_memory() -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        schema::ensure_schema(&pool).await?;
        Ok(Self { pool })
    }

    /// Create a store from an existing connection pool.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the pool, waiting for checked-out connections to be returned.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }

    // ==================== Note Operations ====================

    /// Insert a new note and return it with its assigned id.
    pub async fn insert_note(&self, draft: &NoteDraft) -> StoreResult<Note> {
        let row = sqlx::query_as::<_, NoteRow>(
            r#"
            INSERT INTO notes (title, content)
            VALUES (?, ?)
            RETURNING id, title, content
            "#,
        )
        .bind(draft.title())
        .bind(draft.content())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    /// Get a note by id.
    pub async fn get_note(&self, id: NoteId) -> StoreResult<Option<Note>> {
        let row = sqlx::query_as::<_, NoteRow>(
            r#"SELECT id, title, content FROM notes WHERE id = ?"#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Note::from))
    }

    /// List every note, oldest first.
    pub async fn list_notes(&self) -> StoreResult<Vec<Note>> {
        let rows = sqlx::query_as::<_, NoteRow>(
            r#"SELECT id, title, content FROM notes ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Note::from).collect())
    }

    /// Overwrite title and content of an existing note.
    ///
    /// Returns `None` if no row has the given id.
    pub async fn update_note(&self, id: NoteId, draft: &NoteDraft) -> StoreResult<Option<Note>> {
        let row = sqlx::query_as::<_, NoteRow>(
            r#"
            UPDATE notes
            SET title = ?, content = ?
            WHERE id = ?
            RETURNING id, title, content
            "#,
        )
        .bind(draft.title())
        .bind(draft.content())
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Note::from))
    }

    /// Delete a note. Returns true if a row was removed.
    pub async fn delete_note(&self, id: NoteId) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
