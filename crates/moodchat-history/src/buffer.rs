use std::collections::VecDeque;

use moodchat_types::Message;

use crate::error::HistoryError;

/// Fixed-capacity FIFO of the most recent messages
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    messages: VecDeque<Message>,
    max_size: usize,
}

impl HistoryBuffer {
    pub fn new(max_size: usize) -> Result<Self, HistoryError> {
        if max_size == 0 {
            return Err(HistoryError::InvalidCapacity(max_size));
        }
        Ok(Self {
            messages: VecDeque::with_capacity(max_size + 1),
            max_size,
        })
    }

    /// Build a buffer from existing messages, keeping only the newest `max_size`.
    pub fn from_messages(messages: Vec<Message>, max_size: usize) -> Result<Self, HistoryError> {
        let mut buffer = Self::new(max_size)?;
        let skip = messages.len().saturating_sub(max_size);
        buffer.messages.extend(messages.into_iter().skip(skip));
        Ok(buffer)
    }

    /// Append a message, evicting the oldest when full
    pub fn push(&mut self, message: Message) {
        self.messages.push_back(message);
        while self.messages.len() > self.max_size {
            self.messages.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.back()
    }

    /// Snapshot in chronological order
    pub fn messages(&self) -> Vec<Message> {
        self.messages.iter().cloned().collect()
    }

    /// Plain-text listing with a sentiment emoji per line.
    pub fn render(&self) -> String {
        if self.messages.is_empty() {
            return "No conversation history yet.".to_string();
        }

        let mut lines = vec!["📝 Conversation History:".to_string()];
        for msg in &self.messages {
            lines.push(format!(
                "  {} {} [{}]: {}",
                msg.sentiment.emoji(),
                msg.role.label(),
                msg.intent,
                msg.text
            ));
        }
        lines.join("\n")
    }
}
