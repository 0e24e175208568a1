//! Chat widget endpoint.
//!
//! POST /chat_send - `{message}` from the floating chat widget; answers with
//! a canned reply picked by the rule table in `folio-core`.

use folio_core::chat::service::ChatService;
use folio_infra::sqlite::chat::SqliteChatRepository;
use folio_types::chat::ChatSubmission;

use crate::http::error::AppError;
use crate::http::extractors::payload::JsonPayload;
use crate::http::extractors::scope::Db;
use crate::http::response::Ack;

/// POST /chat_send - Store the visitor message and the bot reply.
#[tracing::instrument(name = "chat_send", skip_all)]
pub async fn chat_send(
    Db(mut scope): Db,
    JsonPayload(submission): JsonPayload<ChatSubmission>,
) -> Result<Ack, AppError> {
    let turn = ChatService::new(SqliteChatRepository::new(&mut scope))
        .send(submission)
        .await?;

    Ok(Ack::reply(turn.reply()))
}
