//! Contact form: persistence port and submission service.

pub mod repository;
pub mod service;
