use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, Write};
use std::time::Duration;

use moodchat_history::{ConversationHistory, HistoryStore};
use moodchat_logging::ConversationLogger;

use super::setup::AppConfig;
use crate::chat::{ChatSession, TurnOutcome, HELP_TEXT};
use crate::responder::Responder;
use crate::typing::type_out;

fn bot_prefix() -> colored::ColoredString {
    "Bot:".bright_blue().bold()
}

/// Run interactive REPL mode
pub async fn run_repl_mode(app_config: AppConfig) -> Result<()> {
    let settings = &app_config.settings;

    println!("{}", "🤖 Moodchat - chat with sentiment analysis".bright_cyan().bold());
    println!(
        "{}",
        "Type 'history' to see your chat, 'clear' to reset, 'help' for commands, or 'exit' to leave\n".bright_black()
    );

    let history = ConversationHistory::open(HistoryStore::new(&settings.history_file), settings.max_history)?;

    if app_config.verbose {
        if let Some(e) = history.load_error() {
            eprintln!("{}", format!("🔧 DEBUG: previous history discarded: {}", e).bright_black());
        }
        eprintln!("{}", format!("🔧 DEBUG: resumed {} messages", history.len()).bright_black());
    }

    // Initialize logger (async) – logs go into the configured log directory
    let logger = if settings.logging {
        match ConversationLogger::new(&settings.log_dir).await {
            Ok(mut l) => {
                l.log("system", "session started").await;
                Some(l)
            }
            Err(e) => {
                eprintln!("Logging disabled: {}", e);
                None
            }
        }
    } else {
        None
    };

    let mut session = ChatSession::new(history, Responder::new()).with_logger(logger);
    let mut rl = DefaultEditor::new()?;
    let delay = Duration::from_millis(settings.typing_delay_ms);
    let goodbye = format!("Goodbye! (History saved to {})", settings.history_file.display());

    loop {
        let readline = rl.readline(&format!("{} ", "You:".bright_green().bold()));

        match readline {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }

                match session.handle(&line).await {
                    TurnOutcome::Empty => {
                        println!("{} Say something — I'm listening.\n", bot_prefix());
                    }
                    TurnOutcome::Exit => {
                        println!("{} {}\n", bot_prefix(), goodbye.bright_cyan());
                        break;
                    }
                    TurnOutcome::History(rendered) => {
                        println!("{} {}\n", bot_prefix(), rendered);
                    }
                    TurnOutcome::Cleared => {
                        println!("{} {}\n", bot_prefix(), "Conversation history cleared!".green());
                    }
                    TurnOutcome::Help => {
                        println!("{} {}\n", bot_prefix(), HELP_TEXT);
                    }
                    TurnOutcome::Reply { text, sentiment, intent } => {
                        if app_config.verbose {
                            eprintln!(
                                "{}",
                                format!("🔧 DEBUG: {} sentiment={} intent={}", sentiment.emoji(), sentiment, intent)
                                    .bright_black()
                            );
                        }
                        let mut stdout = io::stdout();
                        write!(stdout, "{} ", bot_prefix())?;
                        type_out(&mut stdout, &text, delay).await?;
                        println!();
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("\n{} {}\n", bot_prefix(), goodbye.bright_cyan());
                break;
            }
            Err(err) => {
                eprintln!("{} {}", "Error:".bright_red().bold(), err);
                break;
            }
        }
    }

    session.shutdown().await;

    Ok(())
}
