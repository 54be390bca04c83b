//! Telegram notification configuration.

use serde::{Deserialize, Serialize};

/// Telegram notification configuration.
///
/// Credentials are never read from the file: the bot token and chat ID come
/// from `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelegramAppConfig {
    /// Enable telegram notifications.
    #[serde(default)]
    pub enabled: bool,
}
