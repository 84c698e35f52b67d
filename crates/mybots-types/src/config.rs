//! Application configuration types for MyBots.
//!
//! `AppConfig` represents the `config.toml` in the data directory. Every
//! field has a default, so an empty or partial file is valid.

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Bot store file. Relative paths resolve against the data directory.
    #[serde(default = "default_bots_file")]
    pub bots_file: String,

    /// Idle time after which a session's transcripts are discarded.
    #[serde(default = "default_session_lifetime_secs")]
    pub session_lifetime_secs: u64,

    /// Address the REST API binds to.
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory of static web assets served at `/` when it exists.
    #[serde(default)]
    pub web_dir: Option<String>,

    #[serde(default)]
    pub limits: Limits,
}

fn default_bots_file() -> String {
    "bots_data.json".to_string()
}

fn default_session_lifetime_secs() -> u64 {
    86_400
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bots_file: default_bots_file(),
            session_lifetime_secs: default_session_lifetime_secs(),
            host: default_host(),
            port: default_port(),
            web_dir: None,
            limits: Limits::default(),
        }
    }
}

/// Input size limits, counted in characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    #[serde(default = "default_max_bot_name_length")]
    pub max_bot_name_length: usize,
    #[serde(default = "default_max_personality_length")]
    pub max_personality_length: usize,
    #[serde(default = "default_max_prompt_length")]
    pub max_prompt_length: usize,
    #[serde(default = "default_max_message_length")]
    pub max_message_length: usize,
    /// Maximum turns kept per (session, bot) transcript.
    #[serde(default = "default_max_chat_history")]
    pub max_chat_history: usize,
}

fn default_max_bot_name_length() -> usize {
    100
}

fn default_max_personality_length() -> usize {
    500
}

fn default_max_prompt_length() -> usize {
    2000
}

fn default_max_message_length() -> usize {
    1000
}

fn default_max_chat_history() -> usize {
    100
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_bot_name_length: default_max_bot_name_length(),
            max_personality_length: default_max_personality_length(),
            max_prompt_length: default_max_prompt_length(),
            max_message_length: default_max_message_length(),
            max_chat_history: default_max_chat_history(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_default_values() {
        let config = AppConfig::default();
        assert_eq!(config.bots_file, "bots_data.json");
        assert_eq!(config.session_lifetime_secs, 86_400);
        assert_eq!(config.port, 5000);
        assert_eq!(config.limits.max_bot_name_length, 100);
        assert_eq!(config.limits.max_personality_length, 500);
        assert_eq!(config.limits.max_prompt_length, 2000);
        assert_eq!(config.limits.max_message_length, 1000);
        assert_eq!(config.limits.max_chat_history, 100);
    }

    #[test]
    fn test_app_config_deserialize_empty() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_app_config_deserialize_partial_limits() {
        let toml_str = r#"
port = 8080

[limits]
max_chat_history = 20
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.limits.max_chat_history, 20);
        assert_eq!(config.limits.max_message_length, 1000);
        assert_eq!(config.host, "0.0.0.0");
    }
}
