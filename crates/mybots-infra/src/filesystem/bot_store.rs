//! Flat JSON file implementation of [`BotStore`].
//!
//! The file holds one JSON object mapping bot id to record, pretty-printed
//! with two-space indentation. Saves write a sibling temp file and rename it
//! over the target, so readers see either the old or the new contents.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use mybots_core::repository::bot::{BotMap, BotStore};
use mybots_types::error::StorageError;

pub struct JsonFileBotStore {
    path: PathBuf,
}

impl JsonFileBotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    fn io_error(path: &Path, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: path.display().to_string(),
            source,
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "bots".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl BotStore for JsonFileBotStore {
    async fn load(&self) -> Result<BotMap, StorageError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No bot store yet, starting empty");
                return Ok(BotMap::new());
            }
            Err(err) => return Err(Self::io_error(&self.path, err)),
        };

        let bots: BotMap = serde_json::from_str(&raw).map_err(|e| StorageError::Corrupt {
            path: self.display_path(),
            reason: e.to_string(),
        })?;

        if let Some((key, record)) = bots.iter().find(|(key, record)| **key != record.id) {
            return Err(StorageError::Corrupt {
                path: self.display_path(),
                reason: format!("entry '{key}' holds record with id '{}'", record.id),
            });
        }

        Ok(bots)
    }

    async fn save(&self, bots: &BotMap) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| Self::io_error(parent, e))?;
        }

        let json = serde_json::to_string_pretty(bots)
            .map_err(|e| StorageError::Serialize(e.to_string()))?;

        let tmp = self.temp_path();
        tokio::fs::write(&tmp, json.as_bytes())
            .await
            .map_err(|e| Self::io_error(&tmp, e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| Self::io_error(&self.path, e))?;

        debug!(path = %self.path.display(), bots = bots.len(), "Saved bot store");
        Ok(())
    }
}
