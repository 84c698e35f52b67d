use thiserror::Error;

use crate::bot::{BotField, BotId};

/// Input rejected by the validation rules. Never corrected silently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(BotField),

    #[error("{field} must be less than {max} characters")]
    TooLong { field: BotField, max: usize },

    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("Message too long (max {max} characters)")]
    MessageTooLong { max: usize },
}

/// Failures of the bot store's backing data.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("i/o error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupt bot store '{path}': {reason}")]
    Corrupt { path: String, reason: String },

    #[error("failed to serialize bot store: {0}")]
    Serialize(String),
}

/// Errors related to bot and chat operations.
#[derive(Debug, Error)]
pub enum BotError {
    #[error("bot '{0}' not found")]
    NotFound(BotId),

    #[error("bot id '{0}' already exists")]
    IdConflict(BotId),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::Required(BotField::Name).to_string(),
            "Bot name is required"
        );
        assert_eq!(
            ValidationError::TooLong {
                field: BotField::Personality,
                max: 500
            }
            .to_string(),
            "Personality description must be less than 500 characters"
        );
        assert_eq!(
            ValidationError::MessageTooLong { max: 1000 }.to_string(),
            "Message too long (max 1000 characters)"
        );
    }

    #[test]
    fn test_bot_error_from_validation_is_transparent() {
        let err: BotError = ValidationError::EmptyMessage.into();
        assert_eq!(err.to_string(), "Message cannot be empty");
    }

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::Corrupt {
            path: "bots.json".to_string(),
            reason: "expected value".to_string(),
        };
        assert!(err.to_string().contains("bots.json"));
        assert!(err.to_string().contains("expected value"));
    }
}
