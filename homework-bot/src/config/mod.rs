//! Bot configuration: credentials, API endpoint, loop timing, delivery policy and logging. Loaded from env.

mod bot_config;

#[cfg(test)]
mod tests;

pub use bot_config::{check_tokens, log_file_from_env, BotConfig, ConfigError, NotifyPolicy};
