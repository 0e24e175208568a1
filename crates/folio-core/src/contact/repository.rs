//! ContactRepository trait definition.

use folio_types::contact::NewContactInquiry;
use folio_types::error::RepositoryError;

/// Repository trait for contact inquiry persistence.
///
/// Implementations live in folio-infra (e.g., `SqliteContactRepository`).
/// Takes `&mut self` because implementations drive a single request-scoped
/// connection. Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait ContactRepository: Send {
    /// Insert a contact inquiry and commit. Returns the store-assigned id.
    fn insert_contact(
        &mut self,
        inquiry: &NewContactInquiry,
    ) -> impl std::future::Future<Output = Result<i64, RepositoryError>> + Send;
}
