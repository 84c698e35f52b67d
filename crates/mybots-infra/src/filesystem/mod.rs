//! Filesystem adapters for MyBots.
//!
//! Data directory resolution and the JSON-file implementation of the
//! `BotStore` trait from `mybots-core`.

pub mod bot_store;

use std::path::{Path, PathBuf};

pub use bot_store::JsonFileBotStore;

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `MYBOTS_DATA_DIR` environment variable
/// 2. `~/.mybots` under the user's home directory
/// 3. `.mybots` in the current directory
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("MYBOTS_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".mybots");
    }

    PathBuf::from(".mybots")
}

/// Resolve a configured path: absolute paths are kept, relative ones are
/// joined onto the data directory.
pub fn resolve_in_data_dir(data_dir: &Path, configured: &str) -> PathBuf {
    let path = Path::new(configured);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        data_dir.join(path)
    }
}
