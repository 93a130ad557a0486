#![doc = include_str!("../README.md")]

mod tool;

use clap::Parser;
use std::io;
use tool::command::run;
use tool::config::{CliArgs, ToolConfig};
use tool::telemetry::init_tracing;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = ToolConfig::try_from(args)?;

    init_tracing(config.log_format)?;
    tracing::debug!(?config, "starting");

    run(&config, io::stdin().lock(), &mut io::stdout().lock())
}
