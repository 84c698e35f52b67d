//! REST API request handlers.

pub mod bot;
pub mod chat;
