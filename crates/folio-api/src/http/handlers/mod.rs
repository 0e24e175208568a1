//! HTTP request handlers.

pub mod chat;
pub mod contact;
pub mod pages;
