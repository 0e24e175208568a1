//! Application error type mapping to HTTP status codes and the ack format.
//!
//! Validation failures are shown to the visitor as-is. Everything else is
//! logged with full detail and answered with a generic `"Server error"`, so
//! SQL, file paths, or parser output never reach the browser.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_core::error::ServiceError;
use tracing::error;

use crate::http::response::Ack;

/// Message returned for every non-validation failure.
pub const SERVER_ERROR: &str = "Server error";

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Missing required input. Surfaced with its message and a 400.
    Validation(String),
    /// Any other fault. Detail is logged, never returned.
    Internal(String),
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(v) => AppError::Validation(v.to_string()),
            ServiceError::Repository(r) => AppError::Internal(r.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(detail) => {
                error!(error = %detail, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR.to_string())
            }
        };

        (status, Ack::error(message)).into_response()
    }
}
