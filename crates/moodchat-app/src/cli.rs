use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// CLI arguments for moodchat
#[derive(Parser, Debug)]
#[command(name = "moodchat")]
#[command(about = "Moodchat - a small chatbot that remembers the last few messages and their mood")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to a TOML config file (default: moodchat.toml in the working directory, if present)
    #[arg(short, long, value_name = "PATH", env = "MOODCHAT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Where the conversation history is stored
    #[arg(long, value_name = "PATH", env = "MOODCHAT_HISTORY_FILE")]
    pub history_file: Option<PathBuf>,

    /// Number of messages kept in the rolling history
    #[arg(long, value_name = "N")]
    pub max_history: Option<usize>,

    /// Delay between characters of a bot reply, in milliseconds
    #[arg(long, value_name = "MS")]
    pub typing_delay_ms: Option<u64>,

    /// Print bot replies instantly
    #[arg(long)]
    pub no_typing: bool,

    /// Directory for session logs
    #[arg(long, value_name = "DIR", env = "MOODCHAT_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Do not write a session log
    #[arg(long)]
    pub no_log: bool,

    /// Enable verbose debug output (classification, load failures)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Generate shell completions
    #[arg(long, value_enum)]
    pub generate: Option<Shell>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start an interactive chat session (default)
    Chat,
    /// Print the saved conversation history
    History,
    /// Delete the saved conversation history
    Clear,
    /// Print the effective configuration as TOML
    Config,
}
