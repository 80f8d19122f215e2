use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use moodchat_types::{DEFAULT_HISTORY_FILE, DEFAULT_TYPING_DELAY_MS, MAX_HISTORY};

use crate::cli::Cli;

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "moodchat.toml";

/// Runtime settings, layered as defaults < config file < CLI/env
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Where the rolling history is persisted
    pub history_file: PathBuf,
    /// Size of the rolling window
    pub max_history: usize,
    /// Per-character delay for bot replies (0 disables the effect)
    pub typing_delay_ms: u64,
    /// Directory for per-session JSONL logs
    pub log_dir: PathBuf,
    /// Whether session logs are written at all
    pub logging: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            history_file: PathBuf::from(DEFAULT_HISTORY_FILE),
            max_history: MAX_HISTORY,
            typing_delay_ms: DEFAULT_TYPING_DELAY_MS,
            log_dir: PathBuf::from("logs"),
            logging: true,
        }
    }
}

impl ChatConfig {
    /// Load config from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ChatConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Render as TOML, in the same shape `load_from_file` reads
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Build the effective config for a run.
    ///
    /// An explicit `--config` must exist; the default `moodchat.toml` in
    /// `work_dir` is only read when present.
    pub fn resolve(cli: &Cli, work_dir: &Path) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load_from_file(path)
                .with_context(|| format!("Failed to load config file: {}", path.display()))?,
            None => {
                let default_path = work_dir.join(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load_from_file(&default_path).with_context(|| {
                        format!("Failed to load config file: {}", default_path.display())
                    })?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Overlay any values given on the command line or through env vars
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(ref path) = cli.history_file {
            self.history_file = path.clone();
        }
        if let Some(max) = cli.max_history {
            self.max_history = max;
        }
        if let Some(delay) = cli.typing_delay_ms {
            self.typing_delay_ms = delay;
        }
        if cli.no_typing {
            self.typing_delay_ms = 0;
        }
        if let Some(ref dir) = cli.log_dir {
            self.log_dir = dir.clone();
        }
        if cli.no_log {
            self.logging = false;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_history == 0 {
            anyhow::bail!("max_history must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{parse_cli, CleanEnv};
    use pretty_assertions::assert_eq;
    use serial_test::serial;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        let _env = CleanEnv::new();
        parse_cli(args).unwrap()
    }

    #[test]
    #[serial]
    fn test_defaults_without_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = ChatConfig::resolve(&cli(&[]), temp_dir.path()).unwrap();

        assert_eq!(config, ChatConfig::default());
        assert_eq!(config.max_history, 10);
        assert_eq!(config.history_file, PathBuf::from("chat_history.json"));
    }

    #[test]
    #[serial]
    fn test_default_config_file_in_work_dir() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(DEFAULT_CONFIG_FILE),
            "max_history = 5\ntyping_delay_ms = 0\n",
        )
        .unwrap();

        let config = ChatConfig::resolve(&cli(&[]), temp_dir.path()).unwrap();

        assert_eq!(config.max_history, 5);
        assert_eq!(config.typing_delay_ms, 0);
        assert_eq!(config.history_file, PathBuf::from("chat_history.json"));
    }

    #[test]
    #[serial]
    fn test_cli_overrides_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");
        std::fs::write(&path, "max_history = 5\nlogging = true\nhistory_file = \"a.json\"\n").unwrap();
        let path_str = path.to_string_lossy().to_string();

        let config = ChatConfig::resolve(
            &cli(&["--config", path_str.as_str(), "--max-history", "3", "--no-log", "--no-typing"]),
            temp_dir.path(),
        )
        .unwrap();

        assert_eq!(config.max_history, 3);
        assert_eq!(config.history_file, PathBuf::from("a.json"));
        assert!(!config.logging);
        assert_eq!(config.typing_delay_ms, 0);
    }

    #[test]
    #[serial]
    fn test_missing_explicit_config_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = ChatConfig::resolve(&cli(&["--config", "/definitely/not/here.toml"]), temp_dir.path());
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_zero_window_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let result = ChatConfig::resolve(&cli(&["--max-history", "0"]), temp_dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_rendered_toml_reloads() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("saved.toml");
        let config = ChatConfig {
            typing_delay_ms: 5,
            logging: false,
            ..ChatConfig::default()
        };

        std::fs::write(&path, config.to_toml().unwrap()).unwrap();

        assert_eq!(ChatConfig::load_from_file(&path).unwrap(), config);
    }

    #[test]
    #[serial]
    fn test_env_history_file_reaches_settings() {
        let temp_dir = TempDir::new().unwrap();
        let env = CleanEnv::new();
        env.set("MOODCHAT_HISTORY_FILE", "from-env.json");

        let config = ChatConfig::resolve(&parse_cli(&[]).unwrap(), temp_dir.path()).unwrap();

        assert_eq!(config.history_file, PathBuf::from("from-env.json"));
    }
}
