//! Best-effort delivery of notification texts.

use homework_core::{Bot, ChatTarget};
use tracing::{debug, error, info};

/// Sends `text` to `chat`. Delivery errors are logged and absorbed, never returned.
///
/// Returns whether the message reached the Bot API.
pub async fn send_message(bot: &dyn Bot, chat: &ChatTarget, text: &str) -> bool {
    info!(chat = %chat, "Sending message to Telegram");
    match bot.send_message(chat, text).await {
        Ok(()) => {
            debug!(chat = %chat, message = %text, "Message sent to Telegram");
            true
        }
        Err(e) => {
            error!(chat = %chat, error = %e, "Message not sent to Telegram");
            false
        }
    }
}
