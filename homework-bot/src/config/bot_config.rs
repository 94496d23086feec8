//! BotConfig: immutable settings built once at startup and passed explicitly to the runner.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use homework_core::ChatTarget;
use practicum_client::DEFAULT_ENDPOINT;
use thiserror::Error;

/// Variables without which the bot cannot start.
pub const REQUIRED_VARS: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_LOG_FILE: &str = "logs/homework-bot.log";

/// Startup configuration failures. All of them are fatal.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Отсутствуют переменные окружения: {}", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),

    #[error("{name} has invalid value: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Which homeworks of one answer produce notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifyPolicy {
    /// Every record in answer order.
    #[default]
    All,
    /// Only the first (most recent) record.
    Latest,
}

impl FromStr for NotifyPolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(NotifyPolicy::All),
            "latest" => Ok(NotifyPolicy::Latest),
            _ => Err(()),
        }
    }
}

impl fmt::Display for NotifyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifyPolicy::All => f.write_str("all"),
            NotifyPolicy::Latest => f.write_str("latest"),
        }
    }
}

/// Bot config. Use [`BotConfig::load`] for env-based loading.
#[derive(Clone)]
pub struct BotConfig {
    /// PRACTICUM_TOKEN
    pub practicum_token: String,
    /// TELEGRAM_TOKEN
    pub telegram_token: String,
    /// TELEGRAM_CHAT_ID, numeric id or @channel
    pub chat: ChatTarget,
    /// PRACTICUM_ENDPOINT
    pub endpoint: String,
    /// RETRY_PERIOD_SECS: pause between iterations
    pub retry_period_secs: u64,
    /// PRACTICUM_TIMEOUT_SECS: per-request timeout of the API client
    pub request_timeout_secs: u64,
    /// HOMEWORK_NOTIFY_POLICY
    pub notify_policy: NotifyPolicy,
    /// LOG_FILE
    pub log_file: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("practicum_token", &practicum_client::mask_token(&self.practicum_token))
            .field("telegram_token", &practicum_client::mask_token(&self.telegram_token))
            .field("chat", &self.chat)
            .field("endpoint", &self.endpoint)
            .field("retry_period_secs", &self.retry_period_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("notify_policy", &self.notify_policy)
            .field("log_file", &self.log_file)
            .field("telegram_api_url", &self.telegram_api_url)
            .finish()
    }
}

/// Returns names of required variables that are unset or blank.
pub fn check_tokens() -> Vec<&'static str> {
    REQUIRED_VARS
        .into_iter()
        .filter(|name| non_empty_var(name).is_none())
        .collect()
}

/// LOG_FILE or the default path. Read separately so logging can start before the rest of config.
pub fn log_file_from_env() -> String {
    non_empty_var("LOG_FILE").unwrap_or_else(|| DEFAULT_LOG_FILE.to_string())
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match non_empty_var(name) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value: raw }),
    }
}

impl BotConfig {
    /// Loads from environment variables. Fails listing every missing credential.
    pub fn load() -> Result<Self, ConfigError> {
        let missing = check_tokens();
        if !missing.is_empty() {
            return Err(ConfigError::MissingCredentials(missing));
        }

        let required = |name: &'static str| non_empty_var(name).unwrap_or_default();

        let config = Self {
            practicum_token: required("PRACTICUM_TOKEN"),
            telegram_token: required("TELEGRAM_TOKEN"),
            chat: ChatTarget::parse(&required("TELEGRAM_CHAT_ID")),
            endpoint: non_empty_var("PRACTICUM_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            retry_period_secs: parse_var("RETRY_PERIOD_SECS", DEFAULT_RETRY_PERIOD_SECS)?,
            request_timeout_secs: parse_var("PRACTICUM_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
            notify_policy: parse_var("HOMEWORK_NOTIFY_POLICY", NotifyPolicy::All)?,
            log_file: log_file_from_env(),
            telegram_api_url: non_empty_var("TELEGRAM_API_URL")
                .or_else(|| non_empty_var("TELOXIDE_API_URL")),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates periods and URLs. Called by load(); exposed for configs built by hand.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Both periods must be positive.
        if self.retry_period_secs == 0 {
            return Err(ConfigError::InvalidValue {
                name: "RETRY_PERIOD_SECS",
                value: self.retry_period_secs.to_string(),
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                name: "PRACTICUM_TIMEOUT_SECS",
                value: self.request_timeout_secs.to_string(),
            });
        }
        if reqwest::Url::parse(&self.endpoint).is_err() {
            return Err(ConfigError::InvalidValue {
                name: "PRACTICUM_ENDPOINT",
                value: self.endpoint.clone(),
            });
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                return Err(ConfigError::InvalidValue {
                    name: "TELEGRAM_API_URL",
                    value: url_str.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn retry_period(&self) -> Duration {
        Duration::from_secs(self.retry_period_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
