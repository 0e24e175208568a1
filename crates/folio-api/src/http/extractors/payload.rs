//! JSON body extractor that ignores `Content-Type`.
//!
//! The widget scripts post JSON, but some browsers and proxies send it as
//! `text/plain`. The body is parsed as JSON whatever the header says. The
//! top-level value must be an object; a body that does not parse, or parses
//! to anything else, is a server-side fault, not a validation error.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::http::error::AppError;

pub struct JsonPayload<T>(pub T);

impl<S, T> FromRequest<S> for JsonPayload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to read request body: {e}")))?;

        let value: Value = serde_json::from_slice(&body)
            .map_err(|e| AppError::Internal(format!("Malformed JSON payload: {e}")))?;

        if !value.is_object() {
            return Err(AppError::Internal(format!(
                "Expected a JSON object payload, got: {value}"
            )));
        }

        T::deserialize(value)
            .map(JsonPayload)
            .map_err(|e| AppError::Internal(format!("Malformed JSON payload: {e}")))
    }
}
