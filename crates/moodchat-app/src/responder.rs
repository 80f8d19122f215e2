use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use moodchat_classify::tokenize;
use moodchat_types::Sentiment;

/// Fixed replies, checked in order; the first keyword found in the input wins.
pub const KEYWORD_RESPONSES: &[(&str, &str)] = &[
    ("hello", "Hello! How can I help you today?"),
    ("hi", "Hi there! What would you like to talk about?"),
    (
        "help",
        "I can chat with you and remember our conversation. Type 'history' to see what we've talked about, or just keep chatting!",
    ),
    ("bye", "Goodbye! Have a great day!"),
    ("thanks", "You're welcome!"),
    ("thank you", "Happy to help!"),
];

pub const POSITIVE_RESPONSES: &[&str] = &[
    "That's wonderful to hear!",
    "I'm glad you're excited!",
    "That sounds amazing!",
    "That's great! Tell me more.",
];

pub const NEGATIVE_RESPONSES: &[&str] = &[
    "I'm sorry to hear that. That sounds frustrating.",
    "I understand. That must be difficult.",
    "I feel for you. Is there anything I can help with?",
    "That's tough. I'm here to listen.",
];

pub const FALLBACK_RESPONSES: &[&str] = &[
    "I'm not sure I understand. Can you rephrase?",
    "Interesting — tell me more.",
    "Hmm, I don't have a good answer for that yet.",
];

pub const EMPTY_INPUT_RESPONSE: &str = "Say something so I can respond!";

/// Picks bot replies from keyword and sentiment tables
pub struct Responder {
    rng: StdRng,
}

impl Responder {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic reply selection
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn reply(&mut self, text: &str, sentiment: Sentiment) -> String {
        if text.trim().is_empty() {
            return EMPTY_INPUT_RESPONSE.to_string();
        }

        if let Some(response) = keyword_response(text) {
            return response.to_string();
        }

        let pool = match sentiment {
            Sentiment::Positive => POSITIVE_RESPONSES,
            Sentiment::Negative => NEGATIVE_RESPONSES,
            Sentiment::Neutral => FALLBACK_RESPONSES,
        };
        pool.choose(&mut self.rng).copied().unwrap_or(FALLBACK_RESPONSES[0]).to_string()
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new()
    }
}

/// Keyword lookup on whole tokens; multi-word keys must appear consecutively.
pub fn keyword_response(text: &str) -> Option<&'static str> {
    let tokens = tokenize(text);

    KEYWORD_RESPONSES.iter().find_map(|(keyword, response)| {
        let needle: Vec<&str> = keyword.split_whitespace().collect();
        tokens
            .windows(needle.len())
            .any(|window| window.iter().zip(&needle).all(|(t, n)| t == n))
            .then_some(*response)
    })
}
