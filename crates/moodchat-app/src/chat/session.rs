use colored::Colorize;

use moodchat_classify::{parse_command, ReplCommand};
use moodchat_history::ConversationHistory;
use moodchat_logging::ConversationLogger;
use moodchat_types::{Intent, Message, Sentiment};

use crate::responder::Responder;

pub const HELP_TEXT: &str = "Commands:\n  \
    history   - show the conversation so far (with sentiment emojis)\n  \
    clear     - start a fresh conversation\n  \
    help      - show this help\n  \
    exit      - leave (also 'quit', 'bye', Ctrl+C)";

/// What the REPL should show after one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Blank line; nothing recorded
    Empty,
    /// Leave the loop
    Exit,
    /// Rendered history, captured before the command itself was recorded
    History(String),
    Cleared,
    Help,
    Reply {
        text: String,
        sentiment: Sentiment,
        intent: Intent,
    },
}

/// One chat session: history, reply selection and the optional session log
pub struct ChatSession {
    history: ConversationHistory,
    responder: Responder,
    logger: Option<ConversationLogger>,
}

impl ChatSession {
    pub fn new(history: ConversationHistory, responder: Responder) -> Self {
        Self {
            history,
            responder,
            logger: None,
        }
    }

    pub fn with_logger(mut self, logger: Option<ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    /// Handle one line of input
    pub async fn handle(&mut self, input: &str) -> TurnOutcome {
        let input = input.trim();
        if input.is_empty() {
            return TurnOutcome::Empty;
        }

        match parse_command(input) {
            Some(ReplCommand::Exit) => {
                self.log_event("command", input).await;
                TurnOutcome::Exit
            }
            Some(ReplCommand::History) => {
                let rendered = self.history.display();
                let (sentiment, intent) = moodchat_classify::classify(input);
                self.record(Message::user(input, sentiment, intent)).await;
                TurnOutcome::History(rendered)
            }
            Some(ReplCommand::Clear) => {
                if let Err(e) = self.history.clear() {
                    eprintln!("{} Could not save history: {}", "⚠️".yellow(), e);
                }
                self.log_event("command", input).await;
                TurnOutcome::Cleared
            }
            Some(ReplCommand::Help) => {
                self.log_event("command", input).await;
                TurnOutcome::Help
            }
            None => {
                let (sentiment, intent) = moodchat_classify::classify(input);
                self.record(Message::user(input, sentiment, intent)).await;

                let reply = self.responder.reply(input, sentiment);
                self.record(Message::bot(reply.clone())).await;

                TurnOutcome::Reply {
                    text: reply,
                    sentiment,
                    intent,
                }
            }
        }
    }

    /// Append to history and the session log. A failed save is reported and
    /// the session carries on with the in-memory copy.
    async fn record(&mut self, message: Message) {
        if let Some(logger) = &mut self.logger {
            logger.log_message(&message).await;
        }
        if let Err(e) = self.history.add(message) {
            eprintln!("{} Could not save history: {}", "⚠️".yellow(), e);
        }
    }

    async fn log_event(&mut self, role: &str, content: &str) {
        if let Some(logger) = &mut self.logger {
            logger.log(role, content).await;
        }
    }

    /// Graceful shutdown of logger (flush & close)
    pub async fn shutdown(&mut self) {
        if let Some(logger) = &mut self.logger {
            logger.log("system", "session ended").await;
            logger.shutdown().await;
        }
    }
}
