//! Builds the production Practicum client and Telegram bot from [`BotConfig`] and hands them
//! to a [`Poller`]: forever via [`run_bot`], or for a single iteration via [`run_once`].

use std::sync::Arc;

use anyhow::Result;
use homework_core::{Bot, HomeworkApi, TelegramBot};
use practicum_client::PracticumClient;
use tracing::{info, instrument};

use crate::config::BotConfig;
use crate::poller::{IterationOutcome, Poller};

/// Builds the Telegram transport, honouring a custom Bot API URL when configured.
pub fn build_telegram_bot(config: &BotConfig) -> Result<TelegramBot> {
    let bot = match config.telegram_api_url.as_deref() {
        Some(url) => TelegramBot::with_api_url(config.telegram_token.clone(), url)?,
        None => TelegramBot::new(config.telegram_token.clone()),
    };
    Ok(bot)
}

/// Builds the homework API client from config.
pub fn build_practicum_client(config: &BotConfig) -> Result<PracticumClient> {
    Ok(PracticumClient::new(
        config.endpoint.clone(),
        config.practicum_token.clone(),
        config.request_timeout(),
    )?)
}

/// Wires the production API client and Telegram bot into a [`Poller`] starting at `from_date`.
pub fn build_poller(config: &BotConfig, from_date: i64) -> Result<Poller> {
    let api: Arc<dyn HomeworkApi> = Arc::new(build_practicum_client(config)?);
    let bot: Arc<dyn Bot> = Arc::new(build_telegram_bot(config)?);
    Ok(Poller::new(
        api,
        bot,
        config.chat.clone(),
        config.notify_policy,
        config.retry_period(),
        from_date,
    ))
}

/// Main entry: build components and poll forever. Returns only on a build error.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig, from_date: i64) -> Result<()> {
    info!(
        endpoint = %config.endpoint,
        chat = %config.chat,
        "Initializing homework bot"
    );
    let poller = build_poller(&config, from_date)?;
    poller.run().await;
    Ok(())
}

/// Runs a single iteration without the startup message or the pause.
#[instrument(skip(config))]
pub async fn run_once(config: BotConfig, from_date: i64) -> Result<IterationOutcome> {
    let mut poller = build_poller(&config, from_date)?;
    let outcome = poller.tick().await;
    info!(outcome = ?outcome, next_from_date = poller.timestamp(), "Single check finished");
    Ok(outcome)
}
