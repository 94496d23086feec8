//! Error taxonomy for the homework status bot.
//!
//! Display strings are the texts that end up in failure alerts, so they are
//! written in the same language as the chat notifications.

use thiserror::Error;

/// Every recoverable failure a poll iteration can produce.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HomeworkError {
    /// API answered with a status other than 200.
    #[error("Не удалось получить ответ API, ошибка: {status}, причина: {reason}, текст: {body}.")]
    InvalidResponseCode {
        status: u16,
        reason: String,
        body: String,
    },

    /// Transport-level failure (timeout, connection, DNS) or an undecodable body.
    #[error("Ошибка запроса: {0}")]
    RequestFailed(String),

    /// Response is not a JSON object.
    #[error("Ошибка в типе ответа API")]
    InvalidResponseType,

    /// Response lacks `homeworks` or `current_date`.
    #[error("Пустой ответ от API")]
    EmptyResponse,

    #[error("homeworks не является списком")]
    HomeworksNotAList,

    #[error("current_date не является целым числом")]
    CurrentDateNotAnInteger,

    /// Homework record lacks a required key.
    #[error("В ответе отсутствует ключ {0}")]
    MissingKey(&'static str),

    #[error("Неизвестный статус работы - {0}")]
    UndocumentedStatus(String),

    /// Chat delivery failed. Absorbed by the notifier, never alerted.
    #[error("Сообщение в telegram не отправлено: {0}")]
    Bot(String),

    #[error("Ошибка конфигурации: {0}")]
    Config(String),
}

impl HomeworkError {
    /// Whether the poll loop should relay this error to the chat.
    ///
    /// Delivery failures are only logged: alerting about a broken chat
    /// through that same chat cannot succeed.
    pub fn is_alertable(&self) -> bool {
        !matches!(self, HomeworkError::Bot(_))
    }
}

/// Result type for core operations; uses [`HomeworkError`].
pub type Result<T> = std::result::Result<T, HomeworkError>;
