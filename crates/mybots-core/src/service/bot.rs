//! Bot management service.
//!
//! Orchestrates bot creation, update, and deletion against a whole-file
//! [`BotStore`]. Every mutation runs as one guarded load-modify-save cycle so
//! two concurrent writers cannot interleave and lose each other's changes.

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, info};

use mybots_types::bot::{BotId, BotRecord, CreateBotRequest, UpdateBotRequest};
use mybots_types::config::Limits;
use mybots_types::error::{BotError, ValidationError};

use crate::repository::bot::{BotMap, BotStore};
use crate::service::validation;

/// Service owning the bot collection.
///
/// Generic over the store so `mybots-core` never depends on `mybots-infra`.
pub struct BotService<S: BotStore> {
    store: S,
    limits: Limits,
    /// Held for the duration of each read-modify-write cycle.
    write_guard: Mutex<()>,
}

impl<S: BotStore> BotService<S> {
    pub fn new(store: S, limits: Limits) -> Self {
        Self {
            store,
            limits,
            write_guard: Mutex::new(()),
        }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Check candidate fields against the configured limits.
    pub fn validate(&self, name: &str, personality: &str, prompt: &str) -> Result<(), ValidationError> {
        validation::validate_bot_fields(name, personality, prompt, &self.limits)
    }

    /// Run `apply` against the freshly loaded collection and persist the
    /// result. Nothing is saved when `apply` fails.
    async fn modify<T>(
        &self,
        apply: impl FnOnce(&mut BotMap) -> Result<T, BotError>,
    ) -> Result<T, BotError> {
        let _guard = self.write_guard.lock().await;
        let mut bots = self.store.load().await?;
        let out = apply(&mut bots)?;
        self.store.save(&bots).await?;
        Ok(out)
    }

    /// All bots keyed by id.
    pub async fn list_bots(&self) -> Result<BotMap, BotError> {
        Ok(self.store.load().await?)
    }

    pub async fn get_bot(&self, id: &BotId) -> Result<BotRecord, BotError> {
        self.store
            .load()
            .await?
            .remove(id)
            .ok_or_else(|| BotError::NotFound(id.clone()))
    }

    /// Create a bot from validated, trimmed input.
    ///
    /// Uses the client-supplied id when present (non-blank), otherwise one
    /// derived from the creation timestamp. An id that already exists is
    /// rejected rather than overwritten.
    pub async fn create_bot(&self, request: CreateBotRequest) -> Result<BotRecord, BotError> {
        let name = request.name.trim().to_string();
        let personality = request.personality.trim().to_string();
        let prompt = request.prompt.trim().to_string();
        self.validate(&name, &personality, &prompt)?;

        let now = Utc::now();
        let id = match request.id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => BotId::new(id),
            _ => BotId::from_timestamp(now),
        };

        let record = BotRecord {
            id: id.clone(),
            name,
            personality,
            prompt,
            created_at: now,
            updated_at: None,
        };

        let created = self
            .modify(|bots| {
                if bots.contains_key(&id) {
                    return Err(BotError::IdConflict(id.clone()));
                }
                bots.insert(id.clone(), record.clone());
                Ok(record)
            })
            .await?;

        info!(bot_id = %created.id, name = %created.name, "Bot created");
        Ok(created)
    }

    /// Overwrite a bot's name, personality, and prompt, refreshing
    /// `updated_at`.
    pub async fn update_bot(
        &self,
        id: &BotId,
        request: UpdateBotRequest,
    ) -> Result<BotRecord, BotError> {
        let name = request.name.trim().to_string();
        let personality = request.personality.trim().to_string();
        let prompt = request.prompt.trim().to_string();
        self.validate(&name, &personality, &prompt)?;

        let updated = self
            .modify(|bots| {
                let bot = bots
                    .get_mut(id)
                    .ok_or_else(|| BotError::NotFound(id.clone()))?;
                bot.name = name;
                bot.personality = personality;
                bot.prompt = prompt;
                bot.updated_at = Some(Utc::now());
                Ok(bot.clone())
            })
            .await?;

        info!(bot_id = %id, "Bot updated");
        Ok(updated)
    }

    /// Permanently delete a bot. Session transcripts referencing it are left
    /// in place.
    pub async fn delete_bot(&self, id: &BotId) -> Result<BotRecord, BotError> {
        let removed = self
            .modify(|bots| bots.remove(id).ok_or_else(|| BotError::NotFound(id.clone())))
            .await?;

        info!(bot_id = %id, "Bot deleted");
        debug!(bot_id = %id, "Transcripts for deleted bot are not cascaded");
        Ok(removed)
    }
}
