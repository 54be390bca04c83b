//! Telegram alert delivery.
//!
//! Sends opportunity alerts to a single chat as `MarkdownV2` messages.

mod format;
mod notifier;

pub use format::{escape_markdown, format_alert_message};
pub use notifier::{TelegramConfig, TelegramNotifier};
