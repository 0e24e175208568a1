//! Contact service: trim, validate, and persist a contact form submission.

use chrono::Utc;
use folio_types::contact::{ContactInquiry, ContactSubmission, NewContactInquiry};
use folio_types::error::ValidationError;
use tracing::info;

use crate::contact::repository::ContactRepository;
use crate::error::ServiceError;

/// Handles contact form submissions against a request-scoped repository.
pub struct ContactService<R: ContactRepository> {
    repo: R,
}

impl<R: ContactRepository> ContactService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Access the contact repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Validate a submission and store it.
    ///
    /// All three fields are trimmed. `name` and `email` must be non-empty
    /// afterwards; `message` may be empty. Nothing is written on rejection.
    pub async fn submit(
        &mut self,
        submission: ContactSubmission,
    ) -> Result<ContactInquiry, ServiceError> {
        let inquiry = validate(submission)?;
        let id = self.repo.insert_contact(&inquiry).await?;

        info!(contact_id = id, "Contact inquiry stored");
        Ok(ContactInquiry::from_new(id, inquiry))
    }
}

fn trimmed(field: Option<String>) -> String {
    field.as_deref().unwrap_or_default().trim().to_string()
}

fn validate(submission: ContactSubmission) -> Result<NewContactInquiry, ValidationError> {
    let name = trimmed(submission.name);
    let email = trimmed(submission.email);
    let message = trimmed(submission.message);

    if name.is_empty() || email.is_empty() {
        return Err(ValidationError::MissingContactFields);
    }

    Ok(NewContactInquiry {
        name,
        email,
        message,
        created_at: Utc::now(),
    })
}
