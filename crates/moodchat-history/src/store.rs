use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde_json::Value;

use moodchat_types::{Message, Role, Sentiment};

use crate::error::HistoryError;

/// JSON file holding the serialized history, rewritten in full on every save
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every stored message. A missing file is an empty history.
    pub fn load(&self) -> Result<Vec<Message>, HistoryError> {
        self.load_recent(usize::MAX)
    }

    /// Read only the newest `limit` stored messages. Older records are
    /// dropped before decoding, so a bad record outside the window is ignored.
    pub fn load_recent(&self, limit: usize) -> Result<Vec<Message>, HistoryError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(HistoryError::io(&self.path, e)),
        };

        decode_recent(&json, limit)
    }

    /// Overwrite the file with the given messages
    pub fn save(&self, messages: &[Message]) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| HistoryError::io(parent, e))?;
            }
        }

        let json = serde_json::to_string_pretty(messages)?;
        fs::write(&self.path, json).map_err(|e| HistoryError::io(&self.path, e))
    }
}

/// Parse a history file body. Accepts message objects as well as the
/// `[speaker, text, sentiment?]` tuples written by older versions.
pub fn decode_records(json: &str) -> Result<Vec<Message>, HistoryError> {
    decode_recent(json, usize::MAX)
}

/// Like `decode_records`, keeping only the last `limit` records.
/// Error indices refer to positions in the full file.
pub fn decode_recent(json: &str, limit: usize) -> Result<Vec<Message>, HistoryError> {
    let records: Vec<Value> = serde_json::from_str(json)?;
    let skip = records.len().saturating_sub(limit);

    records
        .into_iter()
        .enumerate()
        .skip(skip)
        .map(|(index, record)| match record {
            Value::Object(_) => Ok(serde_json::from_value(record)?),
            Value::Array(fields) => decode_legacy(index, &fields),
            other => Err(HistoryError::InvalidRecord {
                index,
                reason: format!("expected object or array, found {}", other),
            }),
        })
        .collect()
}

fn decode_legacy(index: usize, fields: &[Value]) -> Result<Message, HistoryError> {
    let invalid = |reason: &str| HistoryError::InvalidRecord {
        index,
        reason: reason.to_string(),
    };

    let (speaker, text) = match fields {
        [Value::String(speaker), Value::String(text), ..] if fields.len() <= 3 => (speaker, text),
        _ => return Err(invalid("legacy record must be [speaker, text] or [speaker, text, sentiment]")),
    };

    let role = if speaker == "user" { Role::User } else { Role::Bot };
    let sentiment = match fields.get(2) {
        Some(Value::String(s)) => Sentiment::from_str(s),
        Some(_) => return Err(invalid("legacy sentiment must be a string")),
        None => Sentiment::Neutral,
    };
    let intent = moodchat_classify::detect_intent(text);

    Ok(Message::new(role, text.clone(), sentiment, intent).with_timestamp(DateTime::<Utc>::default()))
}
