//! Input validation rules for bot fields and chat messages.
//!
//! Lengths are counted in characters, not bytes. Callers trim input before
//! validating; these functions do not trim.

use mybots_types::bot::BotField;
use mybots_types::config::Limits;
use mybots_types::error::ValidationError;

fn check_field(field: BotField, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Required(field));
    }
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

/// Validate a bot's editable fields. The first failing rule is reported,
/// checked in the order name, personality, prompt.
pub fn validate_bot_fields(
    name: &str,
    personality: &str,
    prompt: &str,
    limits: &Limits,
) -> Result<(), ValidationError> {
    check_field(BotField::Name, name, limits.max_bot_name_length)?;
    check_field(BotField::Personality, personality, limits.max_personality_length)?;
    check_field(BotField::Prompt, prompt, limits.max_prompt_length)?;
    Ok(())
}

/// Validate a user chat message.
pub fn validate_message(message: &str, limits: &Limits) -> Result<(), ValidationError> {
    if message.is_empty() {
        return Err(ValidationError::EmptyMessage);
    }
    if message.chars().count() > limits.max_message_length {
        return Err(ValidationError::MessageTooLong {
            max: limits.max_message_length,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_fields() {
        let limits = Limits::default();
        assert!(validate_bot_fields("Test Bot", "Friendly and helpful", "You are a test bot", &limits).is_ok());
    }

    #[test]
    fn test_missing_fields_in_order() {
        let limits = Limits::default();
        assert_eq!(
            validate_bot_fields("", "", "", &limits),
            Err(ValidationError::Required(BotField::Name))
        );
        assert_eq!(
            validate_bot_fields("Bot", "", "", &limits),
            Err(ValidationError::Required(BotField::Personality))
        );
        assert_eq!(
            validate_bot_fields("Bot", "calm", "", &limits),
            Err(ValidationError::Required(BotField::Prompt))
        );
    }

    #[test]
    fn test_name_too_long() {
        let limits = Limits::default();
        let err = validate_bot_fields(&"a".repeat(150), "Friendly", "Test", &limits).unwrap_err();
        assert!(err.to_string().contains("must be less than"));
    }

    #[test]
    fn test_limit_is_inclusive() {
        let limits = Limits::default();
        assert!(validate_bot_fields(&"a".repeat(100), "p", "q", &limits).is_ok());
        assert!(validate_bot_fields(&"a".repeat(101), "p", "q", &limits).is_err());
    }

    #[test]
    fn test_lengths_count_chars() {
        let limits = Limits {
            max_bot_name_length: 3,
            ..Limits::default()
        };
        assert!(validate_bot_fields("äöü", "p", "q", &limits).is_ok());
    }

    #[test]
    fn test_message_rules() {
        let limits = Limits::default();
        assert_eq!(validate_message("", &limits), Err(ValidationError::EmptyMessage));
        assert!(validate_message("Hello bot!", &limits).is_ok());
        assert_eq!(
            validate_message(&"x".repeat(1001), &limits),
            Err(ValidationError::MessageTooLong { max: 1000 })
        );
    }
}
