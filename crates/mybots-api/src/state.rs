//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both the CLI and
//! the REST API. Services are generic over the bot store; AppState pins
//! them to the JSON file store.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use mybots_core::chat::service::ChatService;
use mybots_core::chat::transcript::SessionTranscripts;
use mybots_core::service::bot::BotService;
use mybots_infra::config::load_config;
use mybots_infra::filesystem::{JsonFileBotStore, resolve_data_dir, resolve_in_data_dir};
use mybots_types::config::AppConfig;

/// Concrete type aliases for the service generics pinned to infra implementations.
pub type ConcreteBotService = BotService<JsonFileBotStore>;

pub type ConcreteChatService = ChatService<JsonFileBotStore>;

/// Shared application state holding all services.
#[derive(Clone)]
pub struct AppState {
    pub bot_service: Arc<ConcreteBotService>,
    pub chat_service: Arc<ConcreteChatService>,
    pub config: Arc<AppConfig>,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Resolve the data directory, load configuration, and wire services.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_config(&data_dir).await;
        Ok(Self::from_config(data_dir, config))
    }

    pub fn from_config(data_dir: PathBuf, config: AppConfig) -> Self {
        let bots_path = resolve_in_data_dir(&data_dir, &config.bots_file);
        tracing::debug!(path = %bots_path.display(), "Using bot store");

        let bot_service = Arc::new(BotService::new(
            JsonFileBotStore::new(bots_path),
            config.limits.clone(),
        ));

        let transcripts = SessionTranscripts::new(
            config.limits.max_chat_history,
            Duration::from_secs(config.session_lifetime_secs),
        );
        let chat_service = Arc::new(ChatService::new(bot_service.clone(), transcripts));

        Self {
            bot_service,
            chat_service,
            config: Arc::new(config),
            data_dir,
        }
    }
}
