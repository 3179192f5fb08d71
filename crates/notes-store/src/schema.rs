//! Schema bootstrap.
//!
//! The service has a single table and no versioning: the DDL is idempotent
//! and runs at startup when the table is absent.

use sqlx::SqlitePool;

use crate::error::{StoreError, StoreResult};

/// Embedded DDL for the `notes` table.
pub const NOTES_SCHEMA: &str = include_str!("../../../schema/notes.sql");

/// Create the `notes` table if it does not exist yet.
pub async fn ensure_schema(pool: &SqlitePool) -> StoreResult<()> {
    if is_schema_initialized(pool).await? {
        tracing::debug!("notes table already present");
        return Ok(());
    }

    tracing::info!("Creating notes table...");
    sqlx::raw_sql(NOTES_SCHEMA)
        .execute(pool)
        .await
        .map_err(|e| StoreError::Schema(format!("notes table creation failed: {}", e)))?;

    tracing::info!("Schema created");
    Ok(())
}

/// Returns true if the `notes` table exists.
pub async fn is_schema_initialized(pool: &SqlitePool) -> StoreResult<bool> {
    let result: (i64,) = sqlx::query_as(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM sqlite_master
            WHERE type = 'table'
            AND name = 'notes'
        )
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(result.0 != 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    #[test]
    fn test_schema_embedded() {
        assert!(NOTES_SCHEMA.contains("CREATE TABLE IF NOT EXISTS notes"));
        assert!(NOTES_SCHEMA.contains("AUTOINCREMENT"));
        assert!(NOTES_SCHEMA.contains("title   VARCHAR(100) NOT NULL"));
    }

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        assert!(!is_schema_initialized(&pool).await.unwrap());
        ensure_schema(&pool).await.unwrap();
        assert!(is_schema_initialized(&pool).await.unwrap());
        ensure_schema(&pool).await.unwrap();
    }
}
