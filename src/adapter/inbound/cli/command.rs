//! Command-line interface definitions.
//!
//! Defines the CLI structure for the edgescan application using `clap`.

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Prediction market arbitrage scanner
#[derive(Parser, Debug)]
#[command(name = "edgescan")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the edgescan CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch markets once and print opportunities
    Scan(ScanArgs),

    /// Scan continuously and alert on new opportunities
    Watch(WatchArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Explore available strategies
    #[command(subcommand)]
    Strategies(StrategyCommand),
}

/// Subcommands for `edgescan config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Subcommands for `edgescan strategies`.
#[derive(Subcommand, Debug)]
pub enum StrategyCommand {
    /// List all detection strategies.
    List,
}

/// Shared argument struct for commands that require only a configuration path.
///
/// Without `--config`, `config.toml` is read if present and defaults are
/// used otherwise.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `scan` subcommand.
#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Path to the configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Minimum edge to report (e.g. 0.02 for 2%)
    #[arg(long)]
    pub min_edge: Option<Decimal>,

    /// Maximum markets to fetch
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Arguments for the `watch` subcommand.
#[derive(Parser, Debug)]
pub struct WatchArgs {
    /// Path to the configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Minimum edge to report (e.g. 0.02 for 2%)
    #[arg(long)]
    pub min_edge: Option<Decimal>,

    /// Seconds between scans
    #[arg(long)]
    pub interval: Option<u64>,
}
