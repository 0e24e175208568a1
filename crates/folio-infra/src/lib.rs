//! Infrastructure layer for Folio.
//!
//! Contains implementations of the repository traits defined in `folio-core`
//! (SQLite storage with request-scoped connections), plus the config file
//! loader and data directory resolution.

pub mod config;
pub mod filesystem;
pub mod sqlite;
