//! Config tests.

use crate::config::{check_tokens, BotConfig, ConfigError, NotifyPolicy};
use homework_core::ChatTarget;
use serial_test::serial;
use std::env;

const ALL_VARS: [&str; 11] = [
    "PRACTICUM_TOKEN",
    "TELEGRAM_TOKEN",
    "TELEGRAM_CHAT_ID",
    "PRACTICUM_ENDPOINT",
    "RETRY_PERIOD_SECS",
    "PRACTICUM_TIMEOUT_SECS",
    "HOMEWORK_NOTIFY_POLICY",
    "LOG_FILE",
    "TELEGRAM_API_URL",
    "TELOXIDE_API_URL",
    "RUST_LOG",
];

fn reset_env() {
    for name in ALL_VARS {
        env::remove_var(name);
    }
}

fn set_credentials() {
    env::set_var("PRACTICUM_TOKEN", "practicum_token");
    env::set_var("TELEGRAM_TOKEN", "telegram_token");
    env::set_var("TELEGRAM_CHAT_ID", "123456");
}

#[test]
#[serial]
fn test_load_config_with_defaults() {
    reset_env();
    set_credentials();

    let config = BotConfig::load().unwrap();

    assert_eq!(config.practicum_token, "practicum_token");
    assert_eq!(config.telegram_token, "telegram_token");
    assert_eq!(config.chat, ChatTarget::Id(123456));
    assert_eq!(
        config.endpoint,
        "https://practicum.yandex.ru/api/user_api/homework_statuses/"
    );
    assert_eq!(config.retry_period_secs, 600);
    assert_eq!(config.request_timeout_secs, 30);
    assert_eq!(config.notify_policy, NotifyPolicy::All);
    assert_eq!(config.log_file, "logs/homework-bot.log");
    assert!(config.telegram_api_url.is_none());
}

#[test]
#[serial]
fn test_load_config_with_custom_values() {
    reset_env();
    set_credentials();
    env::set_var("TELEGRAM_CHAT_ID", "@homework_channel");
    env::set_var("PRACTICUM_ENDPOINT", "http://localhost:8080/statuses/");
    env::set_var("RETRY_PERIOD_SECS", "60");
    env::set_var("PRACTICUM_TIMEOUT_SECS", "5");
    env::set_var("HOMEWORK_NOTIFY_POLICY", "latest");
    env::set_var("LOG_FILE", "/tmp/hw.log");
    env::set_var("TELOXIDE_API_URL", "http://localhost:8081");

    let config = BotConfig::load().unwrap();

    assert_eq!(
        config.chat,
        ChatTarget::Username("@homework_channel".to_string())
    );
    assert_eq!(config.endpoint, "http://localhost:8080/statuses/");
    assert_eq!(config.retry_period().as_secs(), 60);
    assert_eq!(config.request_timeout().as_secs(), 5);
    assert_eq!(config.notify_policy, NotifyPolicy::Latest);
    assert_eq!(config.log_file, "/tmp/hw.log");
    assert_eq!(config.telegram_api_url.as_deref(), Some("http://localhost:8081"));

    reset_env();
}

#[test]
#[serial]
fn test_missing_chat_id_is_fatal() {
    reset_env();
    set_credentials();
    env::remove_var("TELEGRAM_CHAT_ID");

    let err = BotConfig::load().unwrap_err();

    assert_eq!(err, ConfigError::MissingCredentials(vec!["TELEGRAM_CHAT_ID"]));
    assert_eq!(
        err.to_string(),
        "Отсутствуют переменные окружения: TELEGRAM_CHAT_ID"
    );
}

#[test]
#[serial]
fn test_blank_credentials_count_as_missing() {
    reset_env();
    env::set_var("PRACTICUM_TOKEN", "   ");
    env::set_var("TELEGRAM_TOKEN", "");
    env::set_var("TELEGRAM_CHAT_ID", "1");

    assert_eq!(check_tokens(), vec!["PRACTICUM_TOKEN", "TELEGRAM_TOKEN"]);
    assert!(matches!(
        BotConfig::load(),
        Err(ConfigError::MissingCredentials(_))
    ));

    reset_env();
}

#[test]
#[serial]
fn test_check_tokens_all_present() {
    reset_env();
    set_credentials();

    assert!(check_tokens().is_empty());

    reset_env();
}

#[test]
#[serial]
fn test_invalid_retry_period() {
    reset_env();
    set_credentials();
    env::set_var("RETRY_PERIOD_SECS", "ten minutes");

    let err = BotConfig::load().unwrap_err();

    assert_eq!(
        err,
        ConfigError::InvalidValue {
            name: "RETRY_PERIOD_SECS",
            value: "ten minutes".to_string()
        }
    );

    reset_env();
}

#[test]
#[serial]
fn test_zero_retry_period_rejected() {
    reset_env();
    set_credentials();
    env::set_var("RETRY_PERIOD_SECS", "0");

    let err = BotConfig::load().unwrap_err();

    assert_eq!(
        err,
        ConfigError::InvalidValue {
            name: "RETRY_PERIOD_SECS",
            value: "0".to_string()
        }
    );

    reset_env();
}

#[test]
#[serial]
fn test_zero_timeout_rejected() {
    reset_env();
    set_credentials();
    env::set_var("PRACTICUM_TIMEOUT_SECS", "0");

    let err = BotConfig::load().unwrap_err();

    assert!(matches!(
        err,
        ConfigError::InvalidValue {
            name: "PRACTICUM_TIMEOUT_SECS",
            ..
        }
    ));

    reset_env();
}

#[test]
#[serial]
fn test_invalid_notify_policy() {
    reset_env();
    set_credentials();
    env::set_var("HOMEWORK_NOTIFY_POLICY", "first");

    assert!(matches!(
        BotConfig::load(),
        Err(ConfigError::InvalidValue {
            name: "HOMEWORK_NOTIFY_POLICY",
            ..
        })
    ));

    reset_env();
}

#[test]
#[serial]
fn test_validate_telegram_api_url_invalid() {
    reset_env();
    set_credentials();
    env::set_var("TELEGRAM_API_URL", "not-a-valid-url");

    assert!(matches!(
        BotConfig::load(),
        Err(ConfigError::InvalidValue {
            name: "TELEGRAM_API_URL",
            ..
        })
    ));

    reset_env();
}

#[test]
#[serial]
fn test_debug_masks_tokens() {
    reset_env();
    set_credentials();
    env::set_var("PRACTICUM_TOKEN", "y0_AgAAAAABCDEFGHIJKLMN");

    let config = BotConfig::load().unwrap();
    let debug = format!("{:?}", config);

    assert!(!debug.contains("y0_AgAAAAABCDEFGHIJKLMN"));
    assert!(debug.contains("y0_AgAA***KLMN"));

    reset_env();
}

#[test]
fn test_notify_policy_parse() {
    assert_eq!("all".parse(), Ok(NotifyPolicy::All));
    assert_eq!("LATEST".parse(), Ok(NotifyPolicy::Latest));
    assert!("every".parse::<NotifyPolicy>().is_err());
}
