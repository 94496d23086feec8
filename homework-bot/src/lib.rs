//! # Homework status bot
//!
//! Polls the homework review API and relays status changes to a Telegram chat.
//! Config from env, Poller owns the loop state, runner wires the production clients.

pub mod cli;
pub mod config;
pub mod notifier;
pub mod poller;
pub mod runner;

pub use cli::{Cli, Commands, CursorArgs};
pub use config::{check_tokens, log_file_from_env, BotConfig, ConfigError, NotifyPolicy};
pub use notifier::send_message;
pub use poller::{
    failure_message, startup_message, IterationOutcome, PollState, Poller, FAILURE_PREFIX,
};
pub use runner::{build_poller, run_bot, run_once};
