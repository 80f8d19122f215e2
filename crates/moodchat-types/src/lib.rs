//! Core types and structures for moodchat
//!
//! This crate provides the message model shared by every moodchat crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Number of messages kept in the rolling history window
pub const MAX_HISTORY: usize = 10;

/// Default location of the persisted history
pub const DEFAULT_HISTORY_FILE: &str = "chat_history.json";

/// Default per-character delay for bot replies, in milliseconds
pub const DEFAULT_TYPING_DELAY_MS: u64 = 20;

// ============================================================================
// Labels
// ============================================================================

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

impl Role {
    /// Speaker label used when printing history
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "You",
            Role::Bot => "Bot",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Bot => write!(f, "bot"),
        }
    }
}

/// Coarse mood of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    pub fn emoji(&self) -> &'static str {
        match self {
            Sentiment::Positive => "😊",
            Sentiment::Negative => "😞",
            Sentiment::Neutral => "😐",
        }
    }

    /// Lenient parse; anything unrecognised is neutral
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "positive" => Sentiment::Positive,
            "negative" => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }
}

/// Deserialize a sentiment label with `Sentiment::from_str`, so hand-edited
/// or mis-cased values fall back instead of failing the record
pub fn deserialize_sentiment_lenient<'de, D>(deserializer: D) -> Result<Sentiment, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(Sentiment::from_str(&s)),
        _ => Ok(Sentiment::Neutral),
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Neutral => write!(f, "neutral"),
        }
    }
}

/// Coarse category of an utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Question,
    Greeting,
    Command,
    #[default]
    Statement,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::Question => write!(f, "question"),
            Intent::Greeting => write!(f, "greeting"),
            Intent::Command => write!(f, "command"),
            Intent::Statement => write!(f, "statement"),
        }
    }
}

// ============================================================================
// Message Types
// ============================================================================

/// Helper function to deserialize string or null values
pub fn deserialize_string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

/// A single conversation turn as stored in history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    #[serde(deserialize_with = "deserialize_string_or_null", default)]
    pub text: String,
    #[serde(deserialize_with = "deserialize_sentiment_lenient", default)]
    pub sentiment: Sentiment,
    #[serde(default)]
    pub intent: Intent,
    #[serde(default)]
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a message stamped with the current time
    pub fn new(role: Role, text: impl Into<String>, sentiment: Sentiment, intent: Intent) -> Self {
        Self {
            role,
            text: text.into(),
            sentiment,
            intent,
            timestamp: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>, sentiment: Sentiment, intent: Intent) -> Self {
        Self::new(Role::User, text, sentiment, intent)
    }

    /// Bot replies are never scored; they are always neutral statements
    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Role::Bot, text, Sentiment::Neutral, Intent::Statement)
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}
