//! SQLite contact repository implementation.
//!
//! Implements `ContactRepository` from `folio-core` on top of a
//! [`RequestScope`], so every insert of a request shares one connection.

use folio_core::contact::repository::ContactRepository;
use folio_types::contact::NewContactInquiry;
use folio_types::error::RepositoryError;

use super::format_datetime;
use super::scope::RequestScope;

/// SQLite-backed implementation of `ContactRepository`.
pub struct SqliteContactRepository<'s> {
    scope: &'s mut RequestScope,
}

impl<'s> SqliteContactRepository<'s> {
    /// Create a repository writing through the given request scope.
    pub fn new(scope: &'s mut RequestScope) -> Self {
        Self { scope }
    }
}

impl ContactRepository for SqliteContactRepository<'_> {
    async fn insert_contact(&mut self, inquiry: &NewContactInquiry) -> Result<i64, RepositoryError> {
        let conn = self.scope.connection().await?;

        let result = sqlx::query(
            "INSERT INTO contacts (name, email, message, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&inquiry.name)
        .bind(&inquiry.email)
        .bind(&inquiry.message)
        .bind(format_datetime(&inquiry.created_at))
        .execute(conn)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(result.last_insert_rowid())
    }
}
