//! Acknowledgment body returned by the JSON endpoints.
//!
//! The site's front-end scripts read a flat object:
//! ```json
//! { "ok": true, "message": "..." }
//! { "ok": true, "reply": "..." }
//! { "ok": false, "error": "..." }
//! ```

use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Ack {
    pub ok: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Ack {
    fn empty(ok: bool) -> Self {
        Self {
            ok,
            message: None,
            reply: None,
            error: None,
        }
    }

    /// Success carrying a human-readable confirmation.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::empty(true)
        }
    }

    /// Success carrying the chat widget's reply.
    pub fn reply(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            ..Self::empty(true)
        }
    }

    /// Failure; the status code is chosen by the caller.
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::empty(false)
        }
    }
}

impl IntoResponse for Ack {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
