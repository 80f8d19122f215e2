//! Moodchat Application Library
//!
//! CLI parsing, configuration, reply selection and the interactive loop.

// Re-export workspace crates
pub use moodchat_classify as classify;
pub use moodchat_history::{self as history, ConversationHistory, HistoryError, HistoryStore};
pub use moodchat_logging::ConversationLogger;
pub use moodchat_types::{self as types, Intent, Message, Role, Sentiment};

// Local modules
pub mod app;
pub mod chat;
pub mod cli;
pub mod config;
pub mod responder;
pub mod typing;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports from local modules
pub use app::{setup_from_cli, run_repl_mode, AppConfig};
pub use chat::{ChatSession, TurnOutcome};
pub use cli::{Cli, Commands};
pub use config::ChatConfig;
pub use responder::Responder;
pub use typing::type_out;
