//! HTTP layer for Folio.
//!
//! Axum router serving the landing page, the navigation redirects, and the
//! two JSON endpoints behind the contact form and the chat widget.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;
pub mod router;
