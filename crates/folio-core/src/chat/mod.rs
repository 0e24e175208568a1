//! Chat widget: message persistence port, canned reply rules, and the service
//! that ties them together.

pub mod repository;
pub mod reply;
pub mod service;
