//! Roster CLI Binary
//!
//! Loads configuration and agents, runs one command, prints its output.

use anyhow::Context;
use clap::Parser;
use roster::logging::init_logging;
use roster::tooling::cli::{Cli, CliContext};
use std::process;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = CliContext::load_config(&cli.workspace, cli.config.as_deref())
        .context("Failed to load configuration")?;

    let overrides = cli.logging_overrides();
    let logging = config.logging.clone().with_overrides(&overrides);
    init_logging(Some(&logging), overrides.file).context("Failed to initialize logging")?;

    let context = CliContext::new(&cli.workspace, config, &cli.agents_dir, cli.no_builtin)
        .context("Failed to load agents")?;

    let output = context.execute(&cli.command)?;
    println!("{}", output);
    Ok(())
}
