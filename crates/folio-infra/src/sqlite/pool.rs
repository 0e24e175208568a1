//! Shared SQLite connection pool in WAL mode.
//!
//! SQLite allows only one writer at a time. Every request borrows at most one
//! connection from this pool through a [`RequestScope`](super::scope::RequestScope);
//! concurrent writers wait on the 5-second busy timeout instead of failing.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use tracing::info;

use super::schema::init_schema;

/// Upper bound on connections handed out to in-flight requests.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 8;

/// Shared pool behind every request scope.
#[derive(Clone)]
pub struct DatabasePool {
    pub pool: SqlitePool,
}

impl DatabasePool {
    /// Open the store and make sure its tables exist.
    ///
    /// Creates the database file if missing. A schema failure is returned to
    /// the caller, which is expected to abort startup.
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        Self::with_max_connections(database_url, DEFAULT_MAX_CONNECTIONS).await
    }

    /// Like [`DatabasePool::new`] with an explicit pool size. Every in-flight
    /// request holds at most one connection.
    pub async fn with_max_connections(
        database_url: &str,
        max_connections: u32,
    ) -> Result<Self, sqlx::Error> {
        let opts = SqliteConnectOptions::from_str(database_url)?
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect_with(opts)
            .await?;

        init_schema(&pool).await?;
        info!(max_connections, "Database ready");

        Ok(Self { pool })
    }
}

/// Build the connection URL for `{data_dir}/{file_name}`.
pub fn database_url(data_dir: &Path, file_name: &str) -> String {
    format!("sqlite://{}?mode=rwc", data_dir.join(file_name).display())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_pool_creates_tables() {
        let dir = tempfile::tempdir().unwrap();
        let url = database_url(dir.path(), "test.db");

        let pool = DatabasePool::new(&url).await.unwrap();

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(&pool.pool)
        .await
        .unwrap();

        let table_names: Vec<&str> = tables.iter().map(|t| t.0.as_str()).collect();
        assert_eq!(table_names, vec!["chats", "contacts"]);
        assert!(dir.path().join("test.db").exists());
    }

    #[tokio::test]
    async fn test_pool_wal_mode() {
        let dir = tempfile::tempdir().unwrap();
        let url = database_url(dir.path(), "test_wal.db");

        let pool = DatabasePool::new(&url).await.unwrap();

        let result: (String,) = sqlx::query_as("PRAGMA journal_mode")
            .fetch_one(&pool.pool)
            .await
            .unwrap();

        assert_eq!(result.0.to_lowercase(), "wal");
    }

    #[tokio::test]
    async fn test_reopen_keeps_rows() {
        let dir = tempfile::tempdir().unwrap();
        let url = database_url(dir.path(), "reopen.db");

        let first = DatabasePool::new(&url).await.unwrap();
        sqlx::query("INSERT INTO chats (sender, message, created_at) VALUES ('user', 'hi', '2024-01-01T00:00:00+00:00')")
            .execute(&first.pool)
            .await
            .unwrap();
        first.pool.close().await;

        let second = DatabasePool::new(&url).await.unwrap();
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM chats")
            .fetch_one(&second.pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_database_url() {
        let url = database_url(Path::new("/srv/site/DataBase"), "appdata.db");
        assert_eq!(url, "sqlite:///srv/site/DataBase/appdata.db?mode=rwc");
    }
}
