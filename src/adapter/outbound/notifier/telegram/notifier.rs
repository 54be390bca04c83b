//! Telegram notifier.
//!
//! Requires the `telegram` feature to be enabled.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use tracing::info;

use super::format::format_alert_message;
use crate::error::{Error, Result};
use crate::port::{Alert, Notifier};

/// Credentials for the Telegram notifier.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    /// Target chat ID for notifications.
    pub chat_id: i64,
}

impl TelegramConfig {
    /// Create configuration from environment variables.
    ///
    /// Reads `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID`. Returns `None` if
    /// either is missing or the chat ID is not an integer.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let bot_token = std::env::var("TELEGRAM_BOT_TOKEN").ok()?;
        let chat_id = std::env::var("TELEGRAM_CHAT_ID")
            .ok()
            .and_then(|s| s.parse().ok())?;

        Some(Self { bot_token, chat_id })
    }
}

/// Telegram notifier that sends messages to a chat.
pub struct TelegramNotifier {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramNotifier {
    /// Create a notifier for the configured chat.
    #[must_use]
    pub fn new(config: &TelegramConfig) -> Self {
        info!(chat_id = config.chat_id, "Telegram notifier started");
        Self {
            bot: Bot::new(&config.bot_token),
            chat_id: ChatId(config.chat_id),
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, alert: &Alert) -> Result<()> {
        let text = format_alert_message(alert);
        self.bot
            .send_message(self.chat_id, text)
            .parse_mode(ParseMode::MarkdownV2)
            .await
            .map_err(|e| Error::Notification(format!("telegram: {e}")))?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "telegram"
    }
}
