use std::env;
use std::ffi::OsString;

use clap::Parser;

use crate::cli::Cli;

/// Environment variables the CLI reads as flag fallbacks
pub const CLI_ENV_VARS: &[&str] = &["MOODCHAT_CONFIG", "MOODCHAT_HISTORY_FILE", "MOODCHAT_LOG_DIR"];

/// Clears the CLI's environment variables for the lifetime of the guard and
/// restores the previous values on drop. Tests holding one must be `#[serial]`.
pub struct CleanEnv {
    saved: Vec<(&'static str, Option<OsString>)>,
}

impl CleanEnv {
    pub fn new() -> Self {
        let saved = CLI_ENV_VARS
            .iter()
            .map(|name| {
                let previous = env::var_os(name);
                env::remove_var(name);
                (*name, previous)
            })
            .collect();
        Self { saved }
    }

    pub fn set(&self, name: &str, value: &str) {
        env::set_var(name, value);
    }
}

impl Drop for CleanEnv {
    fn drop(&mut self) {
        for (name, previous) in &self.saved {
            match previous {
                Some(value) => env::set_var(name, value),
                None => env::remove_var(name),
            }
        }
    }
}

/// Parse `moodchat <args>` with whatever environment is currently set
pub fn parse_cli(args: &[&str]) -> Result<Cli, clap::Error> {
    let mut cli_args = vec!["moodchat"];
    cli_args.extend(args);
    Cli::try_parse_from(cli_args)
}
