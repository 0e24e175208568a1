//! Table definitions and the idempotent schema initializer.

use sqlx::sqlite::SqlitePool;
use tracing::debug;

const CREATE_CONTACTS: &str = r#"
CREATE TABLE IF NOT EXISTS contacts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    message TEXT,
    created_at TEXT NOT NULL
)"#;

// sender is 'user' or 'bot'
const CREATE_CHATS: &str = r#"
CREATE TABLE IF NOT EXISTS chats (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    sender TEXT NOT NULL,
    message TEXT NOT NULL,
    created_at TEXT NOT NULL
)"#;

/// Create the `contacts` and `chats` tables if they are absent, then commit.
///
/// Safe to call any number of times; existing tables and rows are untouched.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query(CREATE_CONTACTS).execute(&mut *tx).await?;
    sqlx::query(CREATE_CHATS).execute(&mut *tx).await?;
    tx.commit().await?;

    debug!("Schema initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::pool::{DatabasePool, database_url};

    #[tokio::test]
    async fn test_init_schema_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let pool = DatabasePool::new(&database_url(dir.path(), "schema.db"))
            .await
            .unwrap();

        sqlx::query(
            "INSERT INTO contacts (name, email, message, created_at) VALUES ('Ada', 'ada@example.com', '', '2024-01-01T00:00:00+00:00')",
        )
        .execute(&pool.pool)
        .await
        .unwrap();

        for _ in 0..3 {
            init_schema(&pool.pool).await.unwrap();
        }

        let (contacts,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM contacts")
            .fetch_one(&pool.pool)
            .await
            .unwrap();
        assert_eq!(contacts, 1);

        let (tables,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name IN ('contacts', 'chats')",
        )
        .fetch_one(&pool.pool)
        .await
        .unwrap();
        assert_eq!(tables, 2);
    }
}
