//! Message formatting for Telegram notifications.

use crate::domain::OpportunityKind;
use crate::port::Alert;

/// Format an alert as a `MarkdownV2` message.
pub fn format_alert_message(alert: &Alert) -> String {
    let emoji = match alert.kind {
        OpportunityKind::Basic => "🎯",
        OpportunityKind::CorrelatedDate => "📅",
        OpportunityKind::MutuallyExclusive => "🔀",
    };

    format!(
        "{} *{} Arbitrage*\n\
        \n\
        📋 {}\n\
        📈 Edge: `{:.2}%`\n\
        🧮 {}\n\
        💵 Volume: `${:.2}`\n\
        🕒 {}",
        emoji,
        escape_markdown(alert.kind.label()),
        escape_markdown(&alert.name),
        alert.edge_pct,
        escape_markdown(&alert.breakdown),
        alert.volume,
        escape_markdown(&alert.detected_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()),
    )
}

/// Escape special characters for Telegram `MarkdownV2`.
pub fn escape_markdown(text: &str) -> String {
    let special_chars = [
        '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
    ];
    let mut result = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        if special_chars.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Opportunity;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn alert() -> Alert {
        let opp = Opportunity::builder()
            .kind(OpportunityKind::MutuallyExclusive)
            .name("Who wins (2026)?")
            .prices(vec![dec!(0.30), dec!(0.30), dec!(0.30)])
            .cost(dec!(0.90))
            .payout(dec!(1))
            .volume(dec!(1234.5))
            .strategy("Buy all 3 outcomes")
            .build()
            .unwrap();
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        Alert::new(&opp, at)
    }

    #[test]
    fn escape_markdown_escapes_specials() {
        assert_eq!(escape_markdown("a.b-c!"), "a\\.b\\-c\\!");
        assert_eq!(escape_markdown("plain"), "plain");
    }

    #[test]
    fn alert_message_contains_escaped_fields() {
        let msg = format_alert_message(&alert());

        assert!(msg.contains("*Mutually Exclusive Arbitrage*"));
        assert!(msg.contains("Who wins \\(2026\\)?"));
        assert!(msg.contains("Edge: `10.00%`"));
        assert!(msg.contains("3 outcomes \\= 0\\.90"));
        assert!(msg.contains("Volume: `$1234.50`"));
        assert!(msg.contains("2026\\-03\\-01 12:00:00 UTC"));
    }
}
