use crate::chat::{ChatSession, TurnOutcome};
use crate::responder::{Responder, NEGATIVE_RESPONSES, POSITIVE_RESPONSES};
use moodchat_classify::{ReplCommand, COMMAND_WORDS};
use moodchat_history::{ConversationHistory, HistoryStore};
use moodchat_logging::ConversationLogger;
use moodchat_types::{Intent, Role, Sentiment, MAX_HISTORY};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

// Helper function to create a session backed by a temp history file
fn create_test_session(temp_dir: &TempDir) -> ChatSession {
    let store = HistoryStore::new(temp_dir.path().join("chat_history.json"));
    let history = ConversationHistory::open(store, MAX_HISTORY).unwrap();
    ChatSession::new(history, Responder::with_seed(3))
}

fn reopen(temp_dir: &TempDir) -> ConversationHistory {
    let store = HistoryStore::new(temp_dir.path().join("chat_history.json"));
    ConversationHistory::open(store, MAX_HISTORY).unwrap()
}

#[tokio::test]
async fn test_blank_input_records_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = create_test_session(&temp_dir);

    assert_eq!(session.handle("   ").await, TurnOutcome::Empty);
    assert!(session.history().is_empty());
}

#[tokio::test]
async fn test_exit_keywords() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = create_test_session(&temp_dir);

    for word in ["exit", "QUIT", " bye ", "Goodbye"] {
        assert_eq!(session.handle(word).await, TurnOutcome::Exit);
    }
    assert!(session.history().is_empty());
}

#[tokio::test]
async fn test_every_command_word_is_handled_by_session() {
    for (word, command) in COMMAND_WORDS {
        let temp_dir = TempDir::new().unwrap();
        let mut session = create_test_session(&temp_dir);

        let outcome = session.handle(word).await;
        let handled = match command {
            ReplCommand::Exit => outcome == TurnOutcome::Exit,
            ReplCommand::Clear => outcome == TurnOutcome::Cleared,
            ReplCommand::Help => outcome == TurnOutcome::Help,
            ReplCommand::History => matches!(outcome, TurnOutcome::History(_)),
        };
        assert!(handled, "{:?} gave {:?}", word, outcome);
    }
}

#[tokio::test]
async fn test_chat_turn_records_user_and_bot() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = create_test_session(&temp_dir);

    let (text, sentiment, intent) = match session.handle("I love sunny days").await {
        TurnOutcome::Reply { text, sentiment, intent } => (text, sentiment, intent),
        other => panic!("expected a reply, got {:?}", other),
    };
    assert_eq!(sentiment, Sentiment::Positive);
    assert_eq!(intent, Intent::Statement);
    assert!(POSITIVE_RESPONSES.contains(&text.as_str()));

    let messages = session.history().messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, Role::User);
    assert_eq!(messages[0].sentiment, Sentiment::Positive);
    assert_eq!(messages[1].role, Role::Bot);
    assert_eq!(messages[1].text, text);
    assert_eq!(messages[1].sentiment, Sentiment::Neutral);
}

#[tokio::test]
async fn test_negative_turn_gets_empathy() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = create_test_session(&temp_dir);

    match session.handle("I hate this weather").await {
        TurnOutcome::Reply { text, sentiment, .. } => {
            assert_eq!(sentiment, Sentiment::Negative);
            assert!(NEGATIVE_RESPONSES.contains(&text.as_str()));
        }
        other => panic!("expected a reply, got {:?}", other),
    }
}

#[tokio::test]
async fn test_greeting_and_question_tags() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = create_test_session(&temp_dir);

    session.handle("hello").await;
    session.handle("what is your name?").await;

    let messages = session.history().messages();
    assert_eq!(messages[0].intent, Intent::Greeting);
    assert_eq!(messages[1].text, "Hello! How can I help you today?");
    assert_eq!(messages[2].intent, Intent::Question);
}

#[tokio::test]
async fn test_history_command_shows_then_records() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = create_test_session(&temp_dir);
    session.handle("hello").await;

    let rendered = match session.handle("History").await {
        TurnOutcome::History(rendered) => rendered,
        other => panic!("expected history, got {:?}", other),
    };
    // header plus the two messages recorded before the command
    assert!(rendered.starts_with("📝 Conversation History:"));
    assert_eq!(rendered.lines().count(), 3);

    let messages = session.history().messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[2].text, "History");
    assert_eq!(messages[2].intent, Intent::Command);
}

#[tokio::test]
async fn test_history_command_on_empty() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = create_test_session(&temp_dir);

    assert_eq!(
        session.handle("history").await,
        TurnOutcome::History("No conversation history yet.".to_string())
    );
}

#[tokio::test]
async fn test_clear_empties_memory_and_disk() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = create_test_session(&temp_dir);
    session.handle("I love it").await;
    session.handle("tell me more").await;

    assert_eq!(session.handle("clear").await, TurnOutcome::Cleared);

    assert!(session.history().is_empty());
    assert!(reopen(&temp_dir).is_empty());
}

#[tokio::test]
async fn test_help_records_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = create_test_session(&temp_dir);

    assert_eq!(session.handle("help").await, TurnOutcome::Help);
    assert!(session.history().is_empty());
}

#[tokio::test]
async fn test_window_bound_across_many_turns() {
    let temp_dir = TempDir::new().unwrap();
    let mut session = create_test_session(&temp_dir);

    for i in 0..30 {
        session.handle(&format!("message number {}", i)).await;
        assert!(session.history().len() <= MAX_HISTORY);
    }

    let persisted = reopen(&temp_dir);
    assert_eq!(persisted.len(), MAX_HISTORY);
    assert_eq!(persisted.messages(), session.history().messages());
    assert_eq!(persisted.messages()[MAX_HISTORY - 1].role, Role::Bot);
}

#[tokio::test]
async fn test_restart_resumes_history() {
    let temp_dir = TempDir::new().unwrap();
    {
        let mut session = create_test_session(&temp_dir);
        session.handle("hi").await;
        session.handle("thanks").await;
    }

    let mut session = create_test_session(&temp_dir);
    assert_eq!(session.history().len(), 4);

    session.handle("great").await;
    let texts: Vec<String> = reopen(&temp_dir).messages().into_iter().map(|m| m.text).collect();
    assert_eq!(texts[0], "hi");
    assert_eq!(texts[2], "thanks");
    assert_eq!(texts[4], "great");
}

#[tokio::test]
async fn test_session_log_receives_messages() {
    let temp_dir = TempDir::new().unwrap();
    let logger = ConversationLogger::new(&temp_dir.path().join("logs")).await.unwrap();
    let log_path = logger.file_path().to_path_buf();
    let mut session = create_test_session(&temp_dir).with_logger(Some(logger));

    session.handle("hello").await;
    session.handle("help").await;
    session.shutdown().await;

    let lines: Vec<String> = std::fs::read_to_string(&log_path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("\"role\":\"user\""));
    assert!(lines[1].contains("\"role\":\"bot\""));
    assert!(lines[2].contains("\"role\":\"command\""));
    assert!(lines[3].contains("session ended"));
}
