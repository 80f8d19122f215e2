use std::path::PathBuf;

use moodchat_types::{Intent, Message, Sentiment};
use tempfile::TempDir;

/// Common test utilities for history persistence testing
pub struct TestFixtures {
    pub temp_dir: TempDir,
}

impl TestFixtures {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn history_path(&self) -> PathBuf {
        self.temp_dir.path().join("chat_history.json")
    }

    /// Write raw content to the history file
    pub fn write_history(&self, content: &str) -> PathBuf {
        let path = self.history_path();
        std::fs::write(&path, content).expect("Failed to write history file");
        path
    }

    pub fn user_message(text: &str) -> Message {
        let (sentiment, intent) = moodchat_classify::classify(text);
        Message::user(text, sentiment, intent)
    }

    pub fn neutral_user(text: &str) -> Message {
        Message::user(text, Sentiment::Neutral, Intent::Statement)
    }
}
