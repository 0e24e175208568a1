//! Business logic and repository trait definitions for Folio.
//!
//! This crate defines the "ports" (repository traits) that the infrastructure
//! layer implements, plus the contact and chat services that trim, validate,
//! and persist visitor submissions. It depends only on `folio-types` -- never
//! on `folio-infra` or any database/IO crate.

pub mod chat;
pub mod contact;
pub mod error;
