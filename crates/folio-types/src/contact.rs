//! Contact form types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw contact form payload as posted by the site's contact form.
///
/// Every field is optional. Missing, `null`, and other empty JSON values
/// (`false`, `0`, `[]`, `{}`) read as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default, deserialize_with = "crate::form::text_field")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::form::text_field")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "crate::form::text_field")]
    pub message: Option<String>,
}

/// A validated contact inquiry waiting to be inserted.
///
/// Built by the contact service after trimming and validation, so `name`
/// and `email` are always non-empty here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewContactInquiry {
    pub name: String,
    pub email: String,
    /// Free-form message body. Empty when the visitor left it blank.
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// A stored contact inquiry. `id` is assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInquiry {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl ContactInquiry {
    /// Attach the store-assigned id to a freshly inserted inquiry.
    pub fn from_new(id: i64, new: NewContactInquiry) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            message: new.message,
            created_at: new.created_at,
        }
    }
}
