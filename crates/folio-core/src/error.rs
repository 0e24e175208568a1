use folio_types::error::{RepositoryError, ValidationError};
use thiserror::Error;

/// Errors returned by the contact and chat services.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The submission was rejected; nothing was written.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The store failed. Earlier writes in the same call are not rolled back.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
