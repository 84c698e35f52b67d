//! Chat sessions for MyBots.
//!
//! `transcript` keeps the bounded per-(session, bot) history; `service`
//! runs one chat exchange end to end.

pub mod service;
pub mod transcript;
