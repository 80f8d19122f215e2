//! Keyword-based sentiment and intent tagging
//!
//! Every rule here is a fixed word list lookup; there is no scoring model.

use moodchat_types::{Intent, Sentiment};

// ============================================================================
// Keyword tables
// ============================================================================

pub const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "awesome", "excellent", "love", "happy", "nice", "wonderful",
    "fantastic", "amazing", "brilliant", "perfect", "beautiful", "delighted",
    "thrilled", "excited", "pleased", "glad", "joy", "superb",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "hate", "sad", "angry", "awful", "poor", "disappointed",
    "frustrated", "upset", "annoyed", "miserable", "disgusting", "horrible",
    "dreadful", "dislike", "worse", "worst", "pathetic", "useless",
];

pub const QUESTION_WORDS: &[&str] = &[
    "what", "why", "how", "when", "where", "who", "whom", "whose", "which",
    "is", "are", "am", "do", "does", "did", "can", "could", "would", "should",
    "will", "shall", "may", "might",
];

pub const GREETING_WORDS: &[&str] = &[
    "hello", "hi", "hey", "greetings", "howdy", "morning", "evening",
    "afternoon", "yo", "hiya",
];

/// A line the REPL handles itself instead of chatting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    History,
    Clear,
    Help,
    Exit,
}

/// Whole-input command words and what they do
pub const COMMAND_WORDS: &[(&str, ReplCommand)] = &[
    ("history", ReplCommand::History),
    ("clear", ReplCommand::Clear),
    ("help", ReplCommand::Help),
    ("exit", ReplCommand::Exit),
    ("quit", ReplCommand::Exit),
    ("bye", ReplCommand::Exit),
    ("goodbye", ReplCommand::Exit),
];

/// Imperative openers that mark an utterance as a request
pub const IMPERATIVE_WORDS: &[&str] = &[
    "show", "tell", "give", "list", "explain", "describe", "find", "open",
    "stop", "start", "please",
];

const TRIM_CHARS: &[char] = &['.', ',', '!', '?', ';', ':', '"', '\''];

// ============================================================================
// Tokenizing
// ============================================================================

/// Lowercase whitespace tokens with surrounding punctuation removed.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|word| word.trim_matches(TRIM_CHARS).to_string())
        .filter(|word| !word.is_empty())
        .collect()
}

fn count_hits(tokens: &[String], table: &[&str]) -> usize {
    tokens.iter().filter(|t| table.contains(&t.as_str())).count()
}

// ============================================================================
// Classifiers
// ============================================================================

/// Positive when positive hits outnumber negative ones, negative in the
/// opposite case, neutral on a tie (including zero hits).
pub fn analyze_sentiment(text: &str) -> Sentiment {
    let tokens = tokenize(text);
    let pos_count = count_hits(&tokens, POSITIVE_WORDS);
    let neg_count = count_hits(&tokens, NEGATIVE_WORDS);

    if pos_count > neg_count {
        Sentiment::Positive
    } else if neg_count > pos_count {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// First matching rule wins: question, command, greeting, statement.
pub fn detect_intent(text: &str) -> Intent {
    let trimmed = text.trim();
    let tokens = tokenize(trimmed);
    let first = tokens.first().map(String::as_str);

    if trimmed.ends_with('?') || first.is_some_and(|w| QUESTION_WORDS.contains(&w)) {
        return Intent::Question;
    }

    if is_command(trimmed) || first.is_some_and(|w| IMPERATIVE_WORDS.contains(&w)) {
        return Intent::Command;
    }

    if tokens.iter().any(|t| GREETING_WORDS.contains(&t.as_str())) {
        return Intent::Greeting;
    }

    Intent::Statement
}

/// The REPL command the whole input names, case-insensitively
pub fn parse_command(text: &str) -> Option<ReplCommand> {
    let lowered = text.trim().to_lowercase();
    COMMAND_WORDS
        .iter()
        .find(|(word, _)| *word == lowered)
        .map(|(_, command)| *command)
}

/// Whether the whole input is one of the REPL's own commands
pub fn is_command(text: &str) -> bool {
    parse_command(text).is_some()
}

pub fn classify(text: &str) -> (Sentiment, Intent) {
    (analyze_sentiment(text), detect_intent(text))
}
