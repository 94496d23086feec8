//! Poll loop: fetch → validate → translate → notify, then sleep and repeat.
//!
//! The cursor and the last delivered text are owned by [`Poller`] and threaded
//! through iterations with `&mut self`. Every iteration ends in an
//! [`IterationOutcome`]; errors never escape [`Poller::tick`].

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local};
use homework_core::{check_response, parse_status, Bot, ChatTarget, HomeworkApi, HomeworkError};
use tracing::{error, info, instrument};

use crate::config::NotifyPolicy;
use crate::notifier::send_message;

/// Prefix of every failure alert.
pub const FAILURE_PREFIX: &str = "Сбой в работе бота";

/// Startup notification text, e.g. `Начало работы telegram бота: 16-10-2026 09:30`.
pub fn startup_message(now: DateTime<Local>) -> String {
    format!("Начало работы telegram бота: {}", now.format("%d-%m-%Y %H:%M"))
}

/// Failure alert text for `error`.
pub fn failure_message(error: &HomeworkError) -> String {
    format!("{}: {}", FAILURE_PREFIX, error)
}

/// How one iteration ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterationOutcome {
    /// Answer had homeworks; `sent` texts went to the chat, `suppressed` repeated the previous one.
    Updated { sent: usize, suppressed: usize },
    /// Answer had no homeworks.
    NoUpdates,
    /// A step failed; the alert was delivered or suppressed as a repeat.
    Failed {
        error: HomeworkError,
        alerted: bool,
    },
}

/// Loop-owned state carried across iterations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollState {
    /// Lower bound (epoch seconds) for the next fetch.
    pub timestamp: i64,
    /// Last text handed to the notifier; repeats of it are not sent again.
    pub last_message: Option<String>,
}

/// Drives the homework API and the bot. Build with [`Poller::new`], then [`Poller::run`].
pub struct Poller {
    api: Arc<dyn HomeworkApi>,
    bot: Arc<dyn Bot>,
    chat: ChatTarget,
    policy: NotifyPolicy,
    retry_period: Duration,
    state: PollState,
}

impl Poller {
    pub fn new(
        api: Arc<dyn HomeworkApi>,
        bot: Arc<dyn Bot>,
        chat: ChatTarget,
        policy: NotifyPolicy,
        retry_period: Duration,
        from_date: i64,
    ) -> Self {
        Self {
            api,
            bot,
            chat,
            policy,
            retry_period,
            state: PollState {
                timestamp: from_date,
                last_message: None,
            },
        }
    }

    pub fn timestamp(&self) -> i64 {
        self.state.timestamp
    }

    pub fn last_message(&self) -> Option<&str> {
        self.state.last_message.as_deref()
    }

    /// Sends the one-time startup notification. Does not take part in dedup.
    pub async fn send_startup_message(&self) -> bool {
        send_message(self.bot.as_ref(), &self.chat, &startup_message(Local::now())).await
    }

    /// Sends `text` unless it equals the last text sent. Returns whether it was handed to the bot.
    async fn deliver_unique(&mut self, text: String) -> bool {
        if self.state.last_message.as_deref() == Some(text.as_str()) {
            info!(message = %text, "Message unchanged, not sending again");
            return false;
        }
        send_message(self.bot.as_ref(), &self.chat, &text).await;
        self.state.last_message = Some(text);
        true
    }

    /// One fetch/validate/translate/deliver pass. The cursor advances only when every step succeeded.
    ///
    /// All selected records are translated before anything is sent, so a bad record aborts
    /// the pass without partial delivery.
    pub async fn poll_once(&mut self) -> Result<IterationOutcome, HomeworkError> {
        let answer = self.api.get_api_answer(self.state.timestamp).await?;
        let validated = check_response(&answer)?;

        let selected = match self.policy {
            NotifyPolicy::All => &validated.homeworks[..],
            NotifyPolicy::Latest => &validated.homeworks[..validated.homeworks.len().min(1)],
        };

        let outcome = if selected.is_empty() {
            info!(from_date = self.state.timestamp, "No new homework statuses");
            IterationOutcome::NoUpdates
        } else {
            let messages = selected
                .iter()
                .map(parse_status)
                .collect::<Result<Vec<_>, _>>()?;

            let mut sent = 0;
            let mut suppressed = 0;
            for message in messages {
                if self.deliver_unique(message).await {
                    sent += 1;
                } else {
                    suppressed += 1;
                }
            }
            IterationOutcome::Updated { sent, suppressed }
        };

        self.state.timestamp = validated.current_date;
        Ok(outcome)
    }

    /// Runs one iteration and absorbs its failure: logs it and alerts the chat unless the
    /// alert repeats the last sent text.
    ///
    /// A successful iteration clears a remembered failure alert, so the same failure
    /// coming back later is alerted again. Verdict dedup is kept.
    #[instrument(skip(self), fields(from_date = self.state.timestamp))]
    pub async fn tick(&mut self) -> IterationOutcome {
        match self.poll_once().await {
            Ok(outcome) => {
                if self
                    .state
                    .last_message
                    .as_deref()
                    .is_some_and(|last| last.starts_with(FAILURE_PREFIX))
                {
                    info!("Failure cleared");
                    self.state.last_message = None;
                }
                outcome
            }
            Err(e) => {
                let message = failure_message(&e);
                error!(error = ?e, "{}", message);
                let alerted = if e.is_alertable() {
                    self.deliver_unique(message).await
                } else {
                    false
                };
                IterationOutcome::Failed { error: e, alerted }
            }
        }
    }

    /// Sends the startup notification, then polls forever with a fixed pause after every iteration.
    pub async fn run(mut self) {
        info!(
            chat = %self.chat,
            policy = %self.policy,
            retry_period_secs = self.retry_period.as_secs(),
            from_date = self.state.timestamp,
            "Homework bot started"
        );
        self.send_startup_message().await;

        loop {
            let outcome = self.tick().await;
            info!(
                outcome = ?outcome,
                retry_period_secs = self.retry_period.as_secs(),
                "Waiting before next status check"
            );
            tokio::time::sleep(self.retry_period).await;
        }
    }
}
