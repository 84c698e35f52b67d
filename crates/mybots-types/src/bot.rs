use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use std::fmt;

/// Unique identifier for a bot.
///
/// Either supplied by the client on creation or derived from the creation
/// timestamp (`<unix seconds>.<microseconds>`). Serialized as a bare string
/// so it can key the bot map in the JSON store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BotId(String);

impl BotId {
    /// Wrap an existing identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive an identifier from a creation timestamp.
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use mybots_types::bot::BotId;
    ///
    /// let at = Utc.timestamp_opt(1_760_870_400, 123_456_000).unwrap();
    /// assert_eq!(BotId::from_timestamp(at).as_str(), "1760870400.123456");
    /// ```
    pub fn from_timestamp(at: DateTime<Utc>) -> Self {
        Self(format!("{}.{:06}", at.timestamp(), at.timestamp_subsec_micros()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A persisted bot persona.
///
/// `personality` is free text scanned for keyword triggers when generating
/// replies; `prompt` is interpolated (truncated) into those replies.
///
/// Timestamps are written as RFC 3339. Offset-less ISO 8601 values, as found
/// in older data files, are read as UTC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotRecord {
    pub id: BotId,
    pub name: String,
    pub personality: String,
    pub prompt: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
    /// Absent until the first update.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_timestamp"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(at) => Ok(at.with_timezone(&Utc)),
        Err(_) => NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc()),
    }
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| parse_timestamp(&raw).map_err(serde::de::Error::custom))
        .transpose()
}

/// The user-editable fields of a bot, used to select validation limits
/// and to phrase validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotField {
    Name,
    Personality,
    Prompt,
}

impl BotField {
    /// Human-readable label used in validation messages.
    pub fn label(&self) -> &'static str {
        match self {
            BotField::Name => "Bot name",
            BotField::Personality => "Personality description",
            BotField::Prompt => "System prompt",
        }
    }
}

impl fmt::Display for BotField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Request to create a new bot.
///
/// Missing text fields deserialize as empty strings so they are reported by
/// validation rather than rejected by the JSON layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBotRequest {
    /// Optional client-chosen id; a timestamp id is generated when absent.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub personality: String,
    #[serde(default)]
    pub prompt: String,
}

/// Request to overwrite a bot's editable fields. All three are required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBotRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub personality: String,
    #[serde(default)]
    pub prompt: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(updated: bool) -> BotRecord {
        let created = Utc.with_ymd_and_hms(2025, 10, 19, 12, 0, 0).unwrap();
        BotRecord {
            id: BotId::new("aria"),
            name: "Aria".to_string(),
            personality: "friendly and enthusiastic".to_string(),
            prompt: "I love helping with cooking.".to_string(),
            created_at: created,
            updated_at: updated.then(|| created + chrono::Duration::minutes(5)),
        }
    }

    #[test]
    fn test_bot_id_from_timestamp_pads_micros() {
        let at = Utc.timestamp_opt(1_700_000_000, 7_000).unwrap();
        assert_eq!(BotId::from_timestamp(at).to_string(), "1700000000.000007");
    }

    #[test]
    fn test_bot_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&BotId::new("abc")).unwrap();
        assert_eq!(json, "\"abc\"");
    }

    #[test]
    fn test_updated_at_omitted_until_set() {
        let json = serde_json::to_value(record(false)).unwrap();
        assert!(json.get("updated_at").is_none());

        let json = serde_json::to_value(record(true)).unwrap();
        assert!(json.get("updated_at").is_some());
    }

    #[test]
    fn test_record_reads_offsetless_timestamps_as_utc() {
        let json = r#"{
            "id": "1729350000.123456",
            "name": "Aria",
            "personality": "friendly",
            "prompt": "p",
            "created_at": "2024-10-19T15:00:00.123456",
            "updated_at": "2024-10-19T16:30:00"
        }"#;
        let record: BotRecord = serde_json::from_str(json).unwrap();
        assert_eq!(
            record.created_at,
            Utc.with_ymd_and_hms(2024, 10, 19, 15, 0, 0).unwrap()
                + chrono::Duration::microseconds(123_456)
        );
        assert_eq!(
            record.updated_at,
            Some(Utc.with_ymd_and_hms(2024, 10, 19, 16, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_record_keeps_rfc3339_round_trip() {
        let original = record(true);
        let json = serde_json::to_string(&original).unwrap();
        let parsed: BotRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_record_rejects_unparseable_timestamp() {
        let json = r#"{"id":"a","name":"A","personality":"p","prompt":"p","created_at":"yesterday"}"#;
        assert!(serde_json::from_str::<BotRecord>(json).is_err());
    }

    #[test]
    fn test_create_request_missing_fields_default_to_empty() {
        let req: CreateBotRequest = serde_json::from_str(r#"{"name":"Aria"}"#).unwrap();
        assert_eq!(req.name, "Aria");
        assert!(req.personality.is_empty());
        assert!(req.prompt.is_empty());
        assert!(req.id.is_none());
    }

    #[test]
    fn test_bot_field_labels() {
        assert_eq!(BotField::Name.to_string(), "Bot name");
        assert_eq!(BotField::Personality.label(), "Personality description");
        assert_eq!(BotField::Prompt.label(), "System prompt");
    }
}
