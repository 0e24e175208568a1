use thiserror::Error;

/// A submission was rejected before anything was written.
///
/// The message is shown to the visitor verbatim.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name and email are required.")]
    MissingContactFields,

    #[error("Empty message")]
    EmptyChatMessage,
}

/// Errors from repository operations (used by trait definitions in folio-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error: {0}")]
    Connection(String),

    #[error("query error: {0}")]
    Query(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::MissingContactFields.to_string(),
            "Name and email are required."
        );
        assert_eq!(ValidationError::EmptyChatMessage.to_string(), "Empty message");
    }

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
    }
}
