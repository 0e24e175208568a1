//! Chat service: persist the visitor message, pick a canned reply, persist
//! the reply.
//!
//! The two inserts are independent commits. If the reply insert fails, the
//! visitor message stays stored; callers see a `Repository` error.

use folio_types::chat::{ChatMessage, ChatSubmission, ChatTurn, NewChatMessage, Sender};
use folio_types::error::ValidationError;
use tracing::{debug, info};

use crate::chat::reply::ReplyRules;
use crate::chat::repository::ChatRepository;
use crate::error::ServiceError;

/// Handles one chat widget exchange against a request-scoped repository.
pub struct ChatService<R: ChatRepository> {
    repo: R,
    rules: ReplyRules,
}

impl<R: ChatRepository> ChatService<R> {
    /// Create a chat service using the site's default rule table.
    pub fn new(repo: R) -> Self {
        Self::with_rules(repo, ReplyRules::default())
    }

    pub fn with_rules(repo: R, rules: ReplyRules) -> Self {
        Self { repo, rules }
    }

    /// Access the chat repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Run one exchange: validate, store the user row, store the bot row.
    pub async fn send(&mut self, submission: ChatSubmission) -> Result<ChatTurn, ServiceError> {
        let text = submission.message.as_deref().unwrap_or_default().trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyChatMessage.into());
        }

        let user = self.store(NewChatMessage::now(Sender::User, text)).await?;

        let reply = self.rules.select(text);
        debug!(category = %reply.category, "Selected canned reply");

        let bot = self.store(NewChatMessage::now(Sender::Bot, reply.text)).await?;

        info!(
            user_message_id = user.id,
            bot_message_id = bot.id,
            category = %reply.category,
            "Chat exchange stored"
        );
        Ok(ChatTurn { user, bot })
    }

    async fn store(&mut self, message: NewChatMessage) -> Result<ChatMessage, ServiceError> {
        let id = self.repo.insert_message(&message).await?;
        Ok(ChatMessage {
            id,
            sender: message.sender,
            message: message.message,
            created_at: message.created_at,
        })
    }
}
