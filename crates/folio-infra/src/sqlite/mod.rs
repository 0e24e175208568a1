//! SQLite storage layer.
//!
//! A shared connection pool, the idempotent schema initializer, the
//! per-request connection scope, and the repositories that write through it.

pub mod chat;
pub mod contact;
pub mod pool;
pub mod schema;
pub mod scope;

use chrono::{DateTime, Utc};

/// Timestamps are stored as RFC 3339 text (ISO-8601, UTC offset).
pub(crate) fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}
