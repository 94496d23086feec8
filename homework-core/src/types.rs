//! Core types: review status, validated API answer, chat target, and the HomeworkApi seam.

use std::fmt;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;

/// Review status of a homework as reported by the API. Deserializes from the lowercase wire code only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub const ALL: [HomeworkStatus; 3] = [
        HomeworkStatus::Approved,
        HomeworkStatus::Reviewing,
        HomeworkStatus::Rejected,
    ];

    /// Status code as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Rejected => "rejected",
        }
    }

    /// Human-readable verdict sentence for this status.
    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// API answer that passed shape validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedResponse {
    /// Homework records, most recent first, as returned by the API.
    pub homeworks: Vec<Value>,
    /// Server time; lower bound for the next fetch.
    pub current_date: i64,
}

/// Where notifications go: a numeric chat id or a public `@channel` username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatTarget {
    Id(i64),
    Username(String),
}

impl ChatTarget {
    /// Parses a TELEGRAM_CHAT_ID value. Numeric strings become ids, anything else a username.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.parse::<i64>() {
            Ok(id) => ChatTarget::Id(id),
            Err(_) => ChatTarget::Username(raw.to_string()),
        }
    }
}

impl fmt::Display for ChatTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatTarget::Id(id) => write!(f, "{}", id),
            ChatTarget::Username(name) => f.write_str(name),
        }
    }
}

/// Source of homework status answers. practicum-client provides the HTTP implementation;
/// tests substitute scripted answers.
#[async_trait]
pub trait HomeworkApi: Send + Sync {
    /// Fetches raw statuses changed since `from_date` (epoch seconds).
    async fn get_api_answer(&self, from_date: i64) -> Result<Value>;
}
