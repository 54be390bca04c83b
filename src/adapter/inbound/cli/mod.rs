//! Command-line interface.
//!
//! Parses arguments with `clap` and dispatches to one handler module per
//! subcommand. Handlers print through [`output`], which honours the global
//! `--json` and `--quiet` flags.

pub mod command;
pub mod config;
pub mod output;
pub mod scan;
pub mod strategy;
pub mod watch;

use command::{Cli, Commands, ConfigCommand, StrategyCommand};

use crate::error::Result;

/// Configure output and run the selected subcommand.
pub async fn execute(cli: Cli) -> Result<()> {
    output::configure(output::OutputConfig::new(cli.json, cli.quiet));

    match cli.command {
        Commands::Scan(args) => scan::execute(&args, cli.verbose).await,
        Commands::Watch(args) => watch::execute(&args, cli.verbose).await,
        Commands::Config(ConfigCommand::Show(args)) => config::execute_show(args.config.as_deref()),
        Commands::Config(ConfigCommand::Validate(args)) => {
            config::execute_validate(args.config.as_deref())
        }
        Commands::Strategies(StrategyCommand::List) => strategy::list(),
    }
}
