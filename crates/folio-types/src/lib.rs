//! Shared domain types for Folio.
//!
//! This crate contains the domain types persisted by the portfolio site:
//! contact inquiries, chat messages, site configuration, and their error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod contact;
pub mod error;
pub mod form;
