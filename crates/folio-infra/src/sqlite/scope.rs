//! Request-scoped store connection.
//!
//! A [`RequestScope`] is created for every inbound request without touching
//! the pool. The first call to [`RequestScope::connection`] borrows one
//! connection; later calls in the same request get that same connection.
//! Dropping the scope hands the connection back to the pool, whichever way
//! the request ended.

use folio_types::error::RepositoryError;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{Sqlite, SqliteConnection, SqlitePool};
use tracing::trace;

use super::pool::DatabasePool;

pub struct RequestScope {
    pool: SqlitePool,
    conn: Option<PoolConnection<Sqlite>>,
}

impl RequestScope {
    pub fn new(pool: &DatabasePool) -> Self {
        Self {
            pool: pool.pool.clone(),
            conn: None,
        }
    }

    /// Whether this scope currently holds a connection.
    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// The scope's connection, opened on first use.
    pub async fn connection(&mut self) -> Result<&mut SqliteConnection, RepositoryError> {
        let conn = match self.conn.take() {
            Some(conn) => conn,
            None => {
                let conn = self
                    .pool
                    .acquire()
                    .await
                    .map_err(|e| RepositoryError::Connection(e.to_string()))?;
                trace!("Opened request-scoped connection");
                conn
            }
        };
        Ok(&mut **self.conn.insert(conn))
    }

    /// Release the connection now instead of at drop.
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for RequestScope {
    fn drop(&mut self) {
        if self.conn.take().is_some() {
            trace!("Released request-scoped connection");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::pool::database_url;

    async fn test_pool(max_connections: u32) -> (tempfile::TempDir, DatabasePool) {
        let dir = tempfile::tempdir().unwrap();
        let url = database_url(dir.path(), "scope.db");
        let pool = DatabasePool::with_max_connections(&url, max_connections)
            .await
            .unwrap();
        (dir, pool)
    }

    #[tokio::test]
    async fn test_scope_is_lazy() {
        let (_dir, pool) = test_pool(1).await;
        let mut scope = RequestScope::new(&pool);
        assert!(!scope.is_open());

        scope.connection().await.unwrap();
        assert!(scope.is_open());
    }

    #[tokio::test]
    async fn test_same_connection_within_scope() {
        let (_dir, pool) = test_pool(4).await;
        let mut scope = RequestScope::new(&pool);

        // Temp tables are visible only to the connection that created them.
        sqlx::query("CREATE TEMP TABLE scope_marker (x INTEGER)")
            .execute(scope.connection().await.unwrap())
            .await
            .unwrap();

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM scope_marker")
            .fetch_one(scope.connection().await.unwrap())
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_released_connection_is_reusable() {
        let (_dir, pool) = test_pool(1).await;

        for _ in 0..5 {
            let mut scope = RequestScope::new(&pool);
            sqlx::query("SELECT 1")
                .execute(scope.connection().await.unwrap())
                .await
                .unwrap();
            scope.release();
        }
    }

    #[tokio::test]
    async fn test_scope_released_on_early_return() {
        let (_dir, pool) = test_pool(1).await;

        async fn failing_request(pool: &DatabasePool) -> Result<(), RepositoryError> {
            let mut scope = RequestScope::new(pool);
            scope.connection().await?;
            Err(RepositoryError::Query("boom".to_string()))
        }

        assert!(failing_request(&pool).await.is_err());

        // With a single-connection pool this only succeeds if the failed
        // request gave its connection back.
        let mut scope = RequestScope::new(&pool);
        assert!(scope.connection().await.is_ok());
    }

    #[tokio::test]
    async fn test_concurrent_scopes_hold_distinct_connections() {
        let (_dir, pool) = test_pool(2).await;
        let mut a = RequestScope::new(&pool);
        let mut b = RequestScope::new(&pool);

        sqlx::query("CREATE TEMP TABLE only_in_a (x INTEGER)")
            .execute(a.connection().await.unwrap())
            .await
            .unwrap();

        let res = sqlx::query("SELECT COUNT(*) FROM only_in_a")
            .fetch_one(b.connection().await.unwrap())
            .await;
        assert!(res.is_err());
    }
}
