use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::io;

use moodchat::app::{run_clear_command, run_config_command, run_history_command};
use moodchat::{run_repl_mode, setup_from_cli, Cli, Commands};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    if let Some(shell) = cli.generate {
        clap_complete::generate(shell, &mut Cli::command(), "moodchat", &mut io::stdout());
        return Ok(());
    }

    let app_config = setup_from_cli(&cli)?;

    // One-shot subcommands print their result and exit
    let output = match cli.command {
        Some(Commands::History) => run_history_command(&app_config)?,
        Some(Commands::Clear) => run_clear_command(&app_config)?,
        Some(Commands::Config) => run_config_command(&app_config)?,
        Some(Commands::Chat) | None => return run_repl_mode(app_config).await,
    };
    println!("{}", output);

    Ok(())
}
