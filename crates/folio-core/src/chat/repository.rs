//! ChatRepository trait definition.
//!
//! Follows the same RPITIT pattern as ContactRepository.

use folio_types::chat::NewChatMessage;
use folio_types::error::RepositoryError;

/// Repository trait for chat message persistence.
///
/// Implementations live in folio-infra (e.g., `SqliteChatRepository`).
pub trait ChatRepository: Send {
    /// Insert one chat message and commit. Returns the store-assigned id.
    ///
    /// Each call commits on its own; the user message and the bot reply of
    /// one exchange are two independent inserts.
    fn insert_message(
        &mut self,
        message: &NewChatMessage,
    ) -> impl std::future::Future<Output = Result<i64, RepositoryError>> + Send;
}
