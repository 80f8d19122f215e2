//! Rolling conversation history with JSON file persistence.

pub mod buffer;
pub mod error;
pub mod store;

pub use buffer::HistoryBuffer;
pub use error::HistoryError;
pub use store::{decode_recent, decode_records, HistoryStore};

use moodchat_types::Message;

/// The in-memory window plus the file that mirrors it.
///
/// Every mutation rewrites the whole file. Memory is updated first, so a
/// failed save leaves the session usable and only the file stale.
#[derive(Debug)]
pub struct ConversationHistory {
    buffer: HistoryBuffer,
    store: HistoryStore,
    load_error: Option<HistoryError>,
}

impl ConversationHistory {
    /// Load whatever the store holds. An unreadable file starts an empty
    /// history; the reason is kept in `load_error`.
    pub fn open(store: HistoryStore, max_size: usize) -> Result<Self, HistoryError> {
        let (messages, load_error) = match store.load_recent(max_size) {
            Ok(messages) => (messages, None),
            Err(e) => (Vec::new(), Some(e)),
        };

        Ok(Self {
            buffer: HistoryBuffer::from_messages(messages, max_size)?,
            store,
            load_error,
        })
    }

    /// Why the persisted history was discarded at startup, if it was
    pub fn load_error(&self) -> Option<&HistoryError> {
        self.load_error.as_ref()
    }

    pub fn add(&mut self, message: Message) -> Result<(), HistoryError> {
        self.buffer.push(message);
        self.save()
    }

    pub fn clear(&mut self) -> Result<(), HistoryError> {
        self.buffer.clear();
        self.save()
    }

    pub fn save(&self) -> Result<(), HistoryError> {
        self.store.save(&self.buffer.messages())
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn messages(&self) -> Vec<Message> {
        self.buffer.messages()
    }

    pub fn display(&self) -> String {
        self.buffer.render()
    }
}
