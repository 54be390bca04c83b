//! Handler for the `scan` command.

use rust_decimal::Decimal;
use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::ScanArgs;
use crate::adapter::inbound::cli::output;
use crate::application::Scanner;
use crate::domain::Opportunity;
use crate::error::Result;
use crate::infrastructure::config::settings::{Config, ConfigOverrides};
use crate::infrastructure::factory::exchange::build_market_fetcher;
use crate::port::{truncate, MAX_ALERT_NAME_CHARS};

#[derive(Tabled)]
struct OpportunityRow {
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Market")]
    name: String,
    #[tabled(rename = "Edge")]
    edge: String,
    #[tabled(rename = "Cost")]
    cost: String,
    #[tabled(rename = "Payout")]
    payout: String,
    #[tabled(rename = "Volume")]
    volume: String,
}

fn rows(opportunities: &[Opportunity]) -> Vec<OpportunityRow> {
    opportunities
        .iter()
        .map(|o| OpportunityRow {
            kind: o.kind().label(),
            name: truncate(o.name(), MAX_ALERT_NAME_CHARS),
            edge: format!("{:.2}%", o.edge() * Decimal::ONE_HUNDRED),
            cost: format!("${:.4}", o.cost()),
            payout: format!("${}", o.payout().normalize()),
            volume: format!("${:.0}", o.volume()),
        })
        .collect()
}

/// Execute the scan command.
pub async fn execute(args: &ScanArgs, verbose: u8) -> Result<()> {
    let config = Config::load_or_default(args.config.as_deref())?.with_overrides(
        ConfigOverrides {
            min_edge: args.min_edge,
            market_limit: args.limit,
            ..Default::default()
        },
    )?;
    config.logging.clone().with_verbosity(verbose).init();

    let scanner = Scanner::from_config(config.detection.clone())?;
    let fetcher = build_market_fetcher(&config);

    let markets = fetcher.get_markets(config.polymarket.market_limit).await?;
    let report = scanner.scan(&markets);

    if output::is_json() {
        for opportunity in &report.opportunities {
            output::emit_json_line("opportunity", serde_json::to_value(opportunity)?);
        }
        output::emit_json_line(
            "summary",
            json!({
                "markets": report.markets,
                "groups": report.groups,
                "detected": report.detected,
                "reported": report.opportunities.len(),
            }),
        );
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Exchange", fetcher.exchange_name());
    output::field("Markets", report.markets);
    output::field("Groups", report.groups);
    output::field("Min edge", format!("{}", config.detection.min_edge));

    output::section("Opportunities");
    if report.opportunities.is_empty() {
        output::note("No opportunities above the minimum edge");
        return Ok(());
    }

    output::lines(&Table::new(rows(&report.opportunities)).to_string());
    output::success(&format!(
        "{} opportunities found",
        output::positive(report.opportunities.len())
    ));
    Ok(())
}
