use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// One of the five fixed wellbeing ratings. Serialized as the bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MoodLevel {
    VerySad = 1,
    Sad = 2,
    Neutral = 3,
    Happy = 4,
    VeryHappy = 5,
}

impl MoodLevel {
    pub const ALL: [MoodLevel; 5] = [
        MoodLevel::VerySad,
        MoodLevel::Sad,
        MoodLevel::Neutral,
        MoodLevel::Happy,
        MoodLevel::VeryHappy,
    ];

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            MoodLevel::VerySad => "Very Sad",
            MoodLevel::Sad => "Sad",
            MoodLevel::Neutral => "Neutral",
            MoodLevel::Happy => "Happy",
            MoodLevel::VeryHappy => "Very Happy",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            MoodLevel::VerySad => "😢",
            MoodLevel::Sad => "😔",
            MoodLevel::Neutral => "😐",
            MoodLevel::Happy => "🙂",
            MoodLevel::VeryHappy => "😊",
        }
    }
}

impl TryFrom<u8> for MoodLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        MoodLevel::ALL
            .into_iter()
            .find(|level| level.value() == value)
            .ok_or_else(|| format!("mood must be between 1 and 5, got {value}"))
    }
}

impl From<MoodLevel> for u8 {
    fn from(level: MoodLevel) -> Self {
        level.value()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub date: DateTime<Utc>,
    pub mood: MoodLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(text: impl Into<String>, sender: Sender, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            sender,
            timestamp,
        }
    }
}

// Requests

/// `mood` is kept untyped so every malformed value (too large, negative,
/// fractional, text) ends up as the same 400 instead of a body rejection.
#[derive(Debug, Default, Deserialize)]
pub struct MoodRequest {
    #[serde(default)]
    pub mood: Option<Value>,
    #[serde(default)]
    pub note: Option<String>,
}

impl MoodRequest {
    /// `Ok(None)` when no level was picked. Form posts carry the level as text.
    pub fn level(&self) -> Result<Option<MoodLevel>, String> {
        let Some(raw) = &self.mood else {
            return Ok(None);
        };
        let value = match raw {
            Value::Null => return Ok(None),
            Value::String(text) if text.trim().is_empty() => return Ok(None),
            Value::Number(number) => number.as_u64(),
            Value::String(text) => text.trim().parse::<u64>().ok(),
            _ => None,
        };
        value
            .and_then(|value| u8::try_from(value).ok())
            .ok_or_else(|| format!("mood must be between 1 and 5, got {raw}"))
            .and_then(MoodLevel::try_from)
            .map(Some)
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct TabRequest {
    pub tab: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct InsightsQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    pub tab: Option<String>,
}

// Responses

#[derive(Debug, Serialize, Deserialize)]
pub struct MoodSubmitResponse {
    pub recorded: Option<MoodEntry>,
    pub entry_count: usize,
    pub streak: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InsightsResponse {
    pub entry_count: usize,
    pub streak: u32,
    pub average_mood: f64,
    pub average_emoji: String,
    pub trend: crate::insights::Trend,
    pub trend_label: String,
    pub recent: Vec<MoodEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranscriptResponse {
    pub messages: Vec<Message>,
    pub pending: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatAccepted {
    pub message: Option<Message>,
    pub reply_after_ms: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ShellResponse {
    pub active_tab: crate::shell::Tab,
}
