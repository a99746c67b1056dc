//! CLI definition and command handling

pub mod commands;

use clap::{Parser, Subcommand};

use commands::{CheckCommand, FmtCommand, MergeCommand};

/// Relog - Changelog build pipeline CLI
#[derive(Debug, Parser)]
#[command(name = "relog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rewrite a changelog document into canonical form
    Fmt(FmtCommand),

    /// Verify that a changelog document is already canonical
    Check(CheckCommand),

    /// Merge a new release section from a commit list
    Merge(MergeCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        // Change to specified directory if provided
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        match self.command {
            Commands::Fmt(ref cmd) => cmd.execute(&self),
            Commands::Check(ref cmd) => cmd.execute(&self),
            Commands::Merge(ref cmd) => cmd.execute(&self),
        }
    }
}
