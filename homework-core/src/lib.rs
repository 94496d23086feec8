//! # homework-core
//!
//! Core pieces of the homework status bot: error taxonomy, response validation,
//! status-to-verdict translation, the [`Bot`] and [`HomeworkApi`] seams, and
//! tracing initialization. Used by practicum-client and homework-bot.

pub mod bot;
pub mod error;
pub mod logger;
pub mod status;
pub mod types;
pub mod validator;

pub use bot::{Bot, TelegramBot};
pub use error::{HomeworkError, Result};
pub use logger::{init_tracing, open_log_file, DEFAULT_LOG_FILTER};
pub use status::parse_status;
pub use types::{ChatTarget, HomeworkApi, HomeworkStatus, ValidatedResponse};
pub use validator::check_response;
