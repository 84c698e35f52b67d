//! Shared domain types for MyBots.
//!
//! This crate contains the domain types used across the workspace:
//! bot records, chat turns, session identifiers, configuration, and the
//! error enums every layer reports through.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod bot;
pub mod chat;
pub mod config;
pub mod error;
