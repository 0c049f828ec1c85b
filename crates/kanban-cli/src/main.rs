//! Kanban CLI
//!
//! Seeds an in-memory board, optionally replays scripted commands against
//! it, and prints the result.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::Cli;

/// Initialize tracing on stderr so board JSON on stdout stays parseable.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "kanban=debug,kanban_core=debug"
    } else {
        "kanban=info,kanban_core=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.execute()
}
