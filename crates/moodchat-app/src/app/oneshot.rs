use anyhow::{Context, Result};

use moodchat_history::{ConversationHistory, HistoryStore};

use super::setup::AppConfig;

fn open_history(app_config: &AppConfig) -> Result<ConversationHistory> {
    let settings = &app_config.settings;
    ConversationHistory::open(HistoryStore::new(&settings.history_file), settings.max_history)
        .context("Failed to open conversation history")
}

/// Render the persisted history without starting a session
pub fn run_history_command(app_config: &AppConfig) -> Result<String> {
    let history = open_history(app_config)?;
    if app_config.verbose {
        if let Some(e) = history.load_error() {
            eprintln!("🔧 DEBUG: history discarded: {}", e);
        }
    }
    Ok(history.display())
}

/// Empty the persisted history
pub fn run_clear_command(app_config: &AppConfig) -> Result<String> {
    let mut history = open_history(app_config)?;
    history
        .clear()
        .with_context(|| format!("Failed to clear {}", app_config.settings.history_file.display()))?;
    Ok("Conversation history cleared!".to_string())
}

/// Effective configuration, as TOML
pub fn run_config_command(app_config: &AppConfig) -> Result<String> {
    app_config.settings.to_toml()
}
