use anyhow::Result;
use colored::Colorize;
use std::env;

use crate::cli::Cli;
use crate::config::ChatConfig;

/// Everything a run mode needs, resolved once from the CLI
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub settings: ChatConfig,
    pub verbose: bool,
}

/// Set up application configuration from CLI arguments
pub fn setup_from_cli(cli: &Cli) -> Result<AppConfig> {
    let work_dir = env::current_dir()?;
    let settings = ChatConfig::resolve(cli, &work_dir)?;

    if cli.verbose {
        eprintln!("{}", format!("🔧 DEBUG: working directory: {}", work_dir.display()).bright_black());
        eprintln!("{}", format!("🔧 DEBUG: history file: {}", settings.history_file.display()).bright_black());
        eprintln!("{}", format!("🔧 DEBUG: max history: {}", settings.max_history).bright_black());
        eprintln!("{}", format!("🔧 DEBUG: typing delay: {} ms", settings.typing_delay_ms).bright_black());
        if settings.logging {
            eprintln!("{}", format!("🔧 DEBUG: log dir: {}", settings.log_dir.display()).bright_black());
        }
    }

    Ok(AppConfig {
        settings,
        verbose: cli.verbose,
    })
}
