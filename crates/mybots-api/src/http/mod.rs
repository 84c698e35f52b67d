//! HTTP/REST API layer for MyBots.
//!
//! Axum-based REST API under `/api/` with session cookies, envelope
//! response format, and CORS support.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;
pub mod router;
