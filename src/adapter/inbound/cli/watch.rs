//! Handler for the `watch` command.

use async_trait::async_trait;
use tokio::sync::watch;
use tracing::info;

use crate::adapter::inbound::cli::command::WatchArgs;
use crate::adapter::inbound::cli::output;
use crate::application::{Scanner, WatchService};
use crate::error::Result;
use crate::infrastructure::config::settings::{Config, ConfigOverrides};
use crate::infrastructure::factory::exchange::build_market_fetcher;
use crate::infrastructure::factory::notifier::build_notifier_registry;
use crate::port::{Alert, Notifier};

/// Prints each alert as a streaming terminal line.
struct ConsoleNotifier;

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn notify(&self, alert: &Alert) -> Result<()> {
        let timestamp = alert.detected_at.format("%H:%M:%S").to_string();
        output::opportunity(&timestamp, &console_line(alert));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "console"
    }
}

fn console_line(alert: &Alert) -> String {
    format!(
        "{} {} edge {}% ({})",
        alert.kind.label(),
        alert.name,
        alert.edge_pct,
        alert.breakdown
    )
}

/// Execute the watch command.
pub async fn execute(args: &WatchArgs, verbose: u8) -> Result<()> {
    let config = Config::load_or_default(args.config.as_deref())?.with_overrides(
        ConfigOverrides {
            min_edge: args.min_edge,
            scan_interval_secs: args.interval,
            ..Default::default()
        },
    )?;
    config.logging.clone().with_verbosity(verbose).init();

    let scanner = Scanner::from_config(config.detection.clone())?;
    let fetcher = build_market_fetcher(&config);
    let mut notifiers = build_notifier_registry(&config);
    notifiers.register(Box::new(ConsoleNotifier));

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Exchange", fetcher.exchange_name());
    output::field("Interval", format!("{}s", config.watch.scan_interval_secs));
    output::field("Min edge", config.detection.min_edge);
    output::field("Strategies", scanner.registry().names().join(", "));
    output::field("Notifiers", notifiers.names().join(", "));
    output::hint("press Ctrl-C to stop");

    let mut service = WatchService::new(
        fetcher,
        config.polymarket.market_limit,
        scanner,
        notifiers,
        &config.watch,
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received");
            let _ = shutdown_tx.send(true);
        }
    });

    service.run_with_shutdown(shutdown_rx).await;
    Ok(())
}
