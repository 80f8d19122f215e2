use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while keeping or persisting conversation history
#[derive(Error, Debug)]
pub enum HistoryError {
    /// File system failure on the history file
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON or a record has the wrong shape
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record that is neither a message object nor a legacy tuple
    #[error("Invalid history record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    /// The rolling window must hold at least one message
    #[error("Invalid history capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),
}

impl HistoryError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        HistoryError::Io {
            path: path.into(),
            source,
        }
    }
}
