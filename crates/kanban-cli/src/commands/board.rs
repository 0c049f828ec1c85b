//! Board commands.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use kanban_core::{BoardCommand, BoardStore};
use std::path::{Path, PathBuf};

use crate::output;

#[derive(Args)]
pub struct ShowArgs {
    /// Print the board as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ApplyArgs {
    /// JSON file holding an array of commands ("-" for stdin)
    pub script: PathBuf,

    /// Print the resulting board as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn show(args: ShowArgs, store: &BoardStore) -> Result<()> {
    print(store, args.json)
}

pub fn apply(args: ApplyArgs, mut store: BoardStore) -> Result<()> {
    let script = read_script(&args.script)?;
    let commands = BoardCommand::parse_script(&script)
        .with_context(|| format!("Invalid script {}", args.script.display()))?;

    let summary = run_script(&mut store, commands)?;

    if !args.json {
        println!(
            "{} Applied {} command(s), skipped {}",
            "✓".green().bold(),
            summary.applied.to_string().cyan(),
            summary.skipped
        );
        println!();
    }
    print(&store, args.json)
}

/// Counts from replaying a script.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    pub applied: usize,
    pub skipped: usize,
}

/// Dispatch every command in order. A command that fails validation is
/// reported and skipped; the rest of the script still runs.
pub fn run_script(store: &mut BoardStore, commands: Vec<BoardCommand>) -> Result<ScriptSummary> {
    let mut summary = ScriptSummary::default();
    for (i, command) in commands.into_iter().enumerate() {
        let name = command.name();
        match store.dispatch(command) {
            Ok(outcome) if outcome.is_applied() => summary.applied += 1,
            Ok(_) => {
                tracing::debug!(step = i + 1, command = name, "Command left the board unchanged");
            }
            Err(e) if e.is_validation() => {
                summary.skipped += 1;
                eprintln!("{} step {} ({}): {}", "⚠".yellow(), i + 1, name, e);
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(summary)
}

fn read_script(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        return std::io::read_to_string(std::io::stdin()).context("Failed to read script from stdin");
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn print(store: &BoardStore, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(store.board())?);
    } else {
        output::print_board(store.board(), store.palette());
    }
    Ok(())
}
