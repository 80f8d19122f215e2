//! Per-session JSONL conversation log.

use anyhow::Result;
use chrono::Local;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use moodchat_types::{Intent, Message, Sentiment};

#[derive(Serialize)]
struct LogEntry {
    timestamp: String, // ISO‑8601 Local time
    role: String,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    sentiment: Option<Sentiment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    intent: Option<Intent>,
}

pub struct ConversationLogger {
    file_path: PathBuf,
    file: Option<tokio::fs::File>,
}

impl ConversationLogger {
    /// Create a new logger; generates the file name based on the current local time.
    pub async fn new(log_dir: &Path) -> Result<Self> {
        fs::create_dir_all(log_dir).await?;

        let now_local = Local::now();
        let filename = format!("moodchat-{}.jsonl", now_local.format("%Y-%m-%d-%H%M%S"));
        let file_path = log_dir.join(filename);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file_path)
            .await?;
        Ok(Self { file_path, file: Some(file) })
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Append a free-form entry (session start/end, commands).
    pub async fn log(&mut self, role: &str, content: &str) {
        let entry = LogEntry {
            timestamp: Local::now().to_rfc3339(),
            role: role.to_string(),
            content: content.to_string(),
            sentiment: None,
            intent: None,
        };
        self.write_entry(&entry).await;
    }

    /// Append a recorded history message with its labels
    pub async fn log_message(&mut self, message: &Message) {
        let entry = LogEntry {
            timestamp: message.timestamp.with_timezone(&Local).to_rfc3339(),
            role: message.role.to_string(),
            content: message.text.clone(),
            sentiment: Some(message.sentiment),
            intent: Some(message.intent),
        };
        self.write_entry(&entry).await;
    }

    async fn write_entry(&mut self, entry: &LogEntry) {
        if let Some(file) = &mut self.file {
            if let Ok(json) = serde_json::to_string(entry) {
                if let Err(e) = file.write_all(json.as_bytes()).await {
                    eprintln!("[Logging error] {}", e);
                } else if let Err(e) = file.write_all(b"\n").await {
                    eprintln!("[Logging error] {}", e);
                } else {
                    let _ = file.flush().await;
                }
            }
        }
    }

    /// Close the logger (explicit drop). Called on graceful shutdown.
    pub async fn shutdown(&mut self) {
        if let Some(file) = self.file.take() {
            let _ = file.sync_all().await;
        }
    }
}
