//! Configuration loader for MyBots.
//!
//! Reads `config.toml` from the data directory (`~/.mybots/` by default) and
//! deserializes it into [`AppConfig`]. Falls back to defaults when the file
//! is missing or malformed, then applies `MYBOTS_*` environment overrides.

use std::path::Path;
use std::str::FromStr;

use mybots_types::config::AppConfig;

/// Load configuration from `{data_dir}/config.toml` plus the environment.
///
/// - If the file does not exist, starts from [`AppConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and
///   starts from the default.
/// - Environment overrides are applied last.
pub async fn load_config(data_dir: &Path) -> AppConfig {
    let config = load_config_file(data_dir).await;
    apply_env_overrides(config, |key: &str| std::env::var(key).ok())
}

async fn load_config_file(data_dir: &Path) -> AppConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return AppConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return AppConfig::default();
        }
    };

    match toml::from_str::<AppConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            AppConfig::default()
        }
    }
}

/// Parse a numeric override, keeping the current value when it is invalid.
fn override_number<T: FromStr + Copy>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    current: T,
) -> T {
    match lookup(key) {
        None => current,
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!("Ignoring {key}={raw:?}: not a valid number");
                current
            }
        },
    }
}

/// Apply `MYBOTS_*` overrides using `lookup` to read variables.
pub fn apply_env_overrides(
    mut config: AppConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> AppConfig {
    if let Some(file) = lookup("MYBOTS_BOTS_FILE") {
        config.bots_file = file;
    }
    if let Some(host) = lookup("MYBOTS_HOST") {
        config.host = host;
    }
    if let Some(dir) = lookup("MYBOTS_WEB_DIR") {
        config.web_dir = Some(dir);
    }
    config.port = override_number(&lookup, "MYBOTS_PORT", config.port);
    config.session_lifetime_secs = override_number(
        &lookup,
        "MYBOTS_SESSION_LIFETIME_SECS",
        config.session_lifetime_secs,
    );

    let limits = &mut config.limits;
    limits.max_bot_name_length =
        override_number(&lookup, "MYBOTS_MAX_BOT_NAME_LENGTH", limits.max_bot_name_length);
    limits.max_personality_length = override_number(
        &lookup,
        "MYBOTS_MAX_PERSONALITY_LENGTH",
        limits.max_personality_length,
    );
    limits.max_prompt_length =
        override_number(&lookup, "MYBOTS_MAX_PROMPT_LENGTH", limits.max_prompt_length);
    limits.max_message_length =
        override_number(&lookup, "MYBOTS_MAX_MESSAGE_LENGTH", limits.max_message_length);
    limits.max_chat_history =
        override_number(&lookup, "MYBOTS_MAX_CHAT_HISTORY", limits.max_chat_history);

    config
}
