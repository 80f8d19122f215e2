// Chat module - per-turn handling of user input against the rolling history
pub mod session;

// Re-export commonly used items
pub use session::{ChatSession, TurnOutcome, HELP_TEXT};

#[cfg(test)]
mod tests;
