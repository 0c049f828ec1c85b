//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use kanban_core::{BoardStore, KanbanConfig};
use std::path::PathBuf;

pub mod board;

/// Kanban - in-memory board driven from the command line
#[derive(Parser)]
#[command(name = "kanban")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a kanban.toml config file
    #[arg(short, long, global = true, env = "KANBAN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the starting board
    Show(board::ShowArgs),

    /// Replay a JSON script of board commands, then print the board
    Apply(board::ApplyArgs),
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        let config = KanbanConfig::load(self.config.as_deref())?;
        let store = BoardStore::from_config(&config)?;

        match self.command {
            Commands::Show(args) => board::show(args, &store),
            Commands::Apply(args) => board::apply(args, store),
        }
    }
}
