//! CLI argument parsing for issuegen

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "issuegen")]
#[command(author, version, about = "Expand seed issue templates for each replacement noun", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Template directory (overrides config)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Show what would be generated without writing
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate every variant (the default)
    Generate,

    /// List discovered seed templates
    List,

    /// Show each seed -> output mapping without writing
    Plan,

    /// Write the effective config as YAML
    InitConfig {
        /// Destination (default: .issuegen.yml)
        path: Option<PathBuf>,
    },
}
