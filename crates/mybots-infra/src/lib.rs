//! Infrastructure layer for MyBots.
//!
//! Contains implementations of the ports defined in `mybots-core`: the flat
//! JSON bot store, data directory resolution, and configuration loading.

pub mod config;
pub mod filesystem;
