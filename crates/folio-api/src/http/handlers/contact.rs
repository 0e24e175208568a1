//! Contact form endpoint.
//!
//! POST /submit_contact - `{name, email, message?}` from the contact section.

use folio_core::contact::service::ContactService;
use folio_infra::sqlite::contact::SqliteContactRepository;
use folio_types::contact::ContactSubmission;

use crate::http::error::AppError;
use crate::http::extractors::payload::JsonPayload;
use crate::http::extractors::scope::Db;
use crate::http::response::Ack;

pub const RECEIVED_MESSAGE: &str = "Thanks! Your message was received.";

/// POST /submit_contact - Validate and store a contact inquiry.
#[tracing::instrument(name = "submit_contact", skip_all)]
pub async fn submit_contact(
    Db(mut scope): Db,
    JsonPayload(submission): JsonPayload<ContactSubmission>,
) -> Result<Ack, AppError> {
    ContactService::new(SqliteContactRepository::new(&mut scope))
        .submit(submission)
        .await?;

    Ok(Ack::message(RECEIVED_MESSAGE))
}
