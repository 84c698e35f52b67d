//! Business logic for MyBots.
//!
//! Holds the rule-based response engine, bot validation rules, the
//! `BotStore` port that the infrastructure layer implements, and the
//! services that sequence store access and session transcripts. Depends
//! only on `mybots-types` -- never on `mybots-infra` or any I/O crate.

pub mod chat;
pub mod repository;
pub mod response;
pub mod service;
