//! SQLite chat repository implementation.
//!
//! Implements `ChatRepository` from `folio-core`. Follows the same pattern
//! as `SqliteContactRepository`: raw queries through the request scope.

use folio_core::chat::repository::ChatRepository;
use folio_types::chat::NewChatMessage;
use folio_types::error::RepositoryError;

use super::format_datetime;
use super::scope::RequestScope;

/// SQLite-backed implementation of `ChatRepository`.
pub struct SqliteChatRepository<'s> {
    scope: &'s mut RequestScope,
}

impl<'s> SqliteChatRepository<'s> {
    /// Create a repository writing through the given request scope.
    pub fn new(scope: &'s mut RequestScope) -> Self {
        Self { scope }
    }
}

impl ChatRepository for SqliteChatRepository<'_> {
    async fn insert_message(&mut self, message: &NewChatMessage) -> Result<i64, RepositoryError> {
        let conn = self.scope.connection().await?;

        let result = sqlx::query("INSERT INTO chats (sender, message, created_at) VALUES (?, ?, ?)")
            .bind(message.sender.to_string())
            .bind(&message.message)
            .bind(format_datetime(&message.created_at))
            .execute(conn)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(result.last_insert_rowid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::pool::{DatabasePool, database_url};
    use folio_core::chat::service::ChatService;
    use folio_types::chat::{ChatSubmission, Sender};

    async fn test_pool() -> DatabasePool {
        let dir = tempfile::tempdir().unwrap();
        let url = database_url(dir.path(), "test.db");
        // Leak tempdir so it lives for the test
        std::mem::forget(dir);
        DatabasePool::new(&url).await.unwrap()
    }

    async fn senders(pool: &DatabasePool) -> Vec<String> {
        sqlx::query_as::<_, (String,)>("SELECT sender FROM chats ORDER BY id")
            .fetch_all(&pool.pool)
            .await
            .unwrap()
            .into_iter()
            .map(|(s,)| s)
            .collect()
    }

    #[tokio::test]
    async fn test_insert_message_stores_sender_text() {
        let pool = test_pool().await;
        let mut scope = RequestScope::new(&pool);
        let mut repo = SqliteChatRepository::new(&mut scope);

        repo.insert_message(&NewChatMessage::now(Sender::User, "hello"))
            .await
            .unwrap();
        repo.insert_message(&NewChatMessage::now(Sender::Bot, "Hi!"))
            .await
            .unwrap();
        scope.release();

        assert_eq!(senders(&pool).await, vec!["user", "bot"]);
    }

    #[tokio::test]
    async fn test_exchange_through_service_uses_one_scope() {
        let pool = test_pool().await;
        let mut scope = RequestScope::new(&pool);

        let turn = ChatService::new(SqliteChatRepository::new(&mut scope))
            .send(ChatSubmission {
                message: Some("tell me about your work".to_string()),
            })
            .await
            .unwrap();

        assert!(scope.is_open());
        assert_eq!(turn.bot.id, turn.user.id + 1);
        assert!(!turn.reply().is_empty());
        scope.release();

        assert_eq!(senders(&pool).await, vec!["user", "bot"]);
    }
}
