//! Handler for the `config` command group.

use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::settings::{Config, DEFAULT_CONFIG_PATH};

fn source_label(path: Option<&Path>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => DEFAULT_CONFIG_PATH.to_string(),
        None => "(defaults)".to_string(),
    }
}

/// Execute `config show`.
pub fn execute_show(path: Option<&Path>) -> Result<()> {
    let config = Config::load_or_default(path)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "source": source_label(path),
            "config": serde_json::to_value(&config)?,
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Source", source_label(path));
    println!();
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: Option<&Path>) -> Result<()> {
    let source = source_label(path);
    let config = Config::load_or_default(path)?;
    config.validate()?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.validate",
            "source": source,
            "valid": true,
        }));
        return Ok(());
    }

    output::section("Config Validation");
    output::field("File", source);
    output::field("Strategies", config.detection.enabled.join(", "));
    output::field("Min edge", config.detection.min_edge);
    output::success("Configuration is valid");
    Ok(())
}
