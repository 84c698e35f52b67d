//! In-process bot store.
//!
//! Keeps the map behind a mutex. Used by tests and by callers that do not
//! need durability.

use std::sync::Mutex;

use mybots_types::error::StorageError;

use super::bot::{BotMap, BotStore};

#[derive(Debug, Default)]
pub struct InMemoryBotStore {
    bots: Mutex<BotMap>,
}

impl InMemoryBotStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> StorageError {
        StorageError::Corrupt {
            path: "memory".to_string(),
            reason: "store lock poisoned".to_string(),
        }
    }
}

impl BotStore for InMemoryBotStore {
    async fn load(&self) -> Result<BotMap, StorageError> {
        let bots = self.bots.lock().map_err(|_| Self::poisoned())?;
        Ok(bots.clone())
    }

    async fn save(&self, bots: &BotMap) -> Result<(), StorageError> {
        let mut current = self.bots.lock().map_err(|_| Self::poisoned())?;
        *current = bots.clone();
        Ok(())
    }
}
