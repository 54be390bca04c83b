//! Strategy listing.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::application::strategy::StrategyRegistry;
use crate::domain::OpportunityKind;
use crate::error::Result;

#[derive(Tabled)]
struct StrategyRow {
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Signal")]
    signal: &'static str,
    #[tabled(rename = "Edge")]
    edge: &'static str,
}

fn describe(kind: OpportunityKind) -> (&'static str, &'static str) {
    match kind {
        OpportunityKind::Basic => ("YES + NO < $1", "1 - (YES + NO)"),
        OpportunityKind::MutuallyExclusive => ("sum(outcomes) < $1, 3+ outcomes", "1 - sum"),
        OpportunityKind::CorrelatedDate => (
            "sum(NO) < n - 1 across date variants",
            "(n - 1 - sum(NO)) / n",
        ),
    }
}

fn rows() -> Vec<StrategyRow> {
    StrategyRegistry::with_all()
        .strategies()
        .iter()
        .map(|s| {
            let (signal, edge) = describe(s.kind());
            StrategyRow {
                name: s.name(),
                signal,
                edge,
            }
        })
        .collect()
}

/// List available strategies.
pub fn list() -> Result<()> {
    if output::is_quiet() && !output::is_json() {
        return Ok(());
    }

    let rows = rows();

    if output::is_json() {
        let strategies: Vec<_> = rows
            .iter()
            .map(|r| json!({ "name": r.name, "signal": r.signal, "edge": r.edge }))
            .collect();
        output::json_output(json!({
            "command": "strategies.list",
            "strategies": strategies,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Available strategies");

    let table = Table::new(rows).to_string();
    output::lines(&table);

    output::hint(&format!(
        "enable or disable them with {} in the config file",
        output::highlight("[detection] enabled")
    ));

    Ok(())
}
