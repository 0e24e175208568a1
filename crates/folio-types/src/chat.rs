//! Chat widget message types.
//!
//! Every exchange with the chat widget produces two rows: the visitor's
//! message (`Sender::User`) followed by the canned reply (`Sender::Bot`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;

/// Who wrote a chat message.
///
/// Stored as lowercase text in the `chats.sender` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Bot => write!(f, "bot"),
        }
    }
}

/// Raw payload posted by the chat widget. Missing, `null`, and other empty
/// JSON values read as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatSubmission {
    #[serde(default, deserialize_with = "crate::form::text_field")]
    pub message: Option<String>,
}

/// A chat message that has not been stored yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewChatMessage {
    pub sender: Sender,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl NewChatMessage {
    /// Build a message stamped with the current UTC time.
    pub fn now(sender: Sender, message: impl Into<String>) -> Self {
        Self {
            sender,
            message: message.into(),
            created_at: Utc::now(),
        }
    }
}

/// A stored chat message. `id` is assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: i64,
    pub sender: Sender,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// One completed widget exchange: the stored visitor message and the reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub user: ChatMessage,
    pub bot: ChatMessage,
}

impl ChatTurn {
    /// The reply text shown to the visitor.
    pub fn reply(&self) -> &str {
        &self.bot.message
    }
}
