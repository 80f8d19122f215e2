pub mod oneshot;
pub mod repl;
pub mod setup;

pub use oneshot::{run_clear_command, run_config_command, run_history_command};
pub use repl::run_repl_mode;
pub use setup::{setup_from_cli, AppConfig};
