//! Command-line interface definitions.

pub mod check;
pub mod list;
pub mod prune;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::rule::SelectionRule;

/// stkprune - prune generated stock-quote tables from a SQLite database.
#[derive(Parser, Debug)]
#[command(name = "stkprune")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Drop every table the selection rule matches
    Prune(PruneArgs),

    /// List the tables the selection rule would drop
    List(ListArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `stkprune check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for the `prune` subcommand.
#[derive(Parser, Debug)]
pub struct PruneArgs {
    /// Path to configuration file (defaults to config.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override database file path
    #[arg(short, long)]
    pub database: Option<PathBuf>,

    /// Override selection rule
    #[arg(short, long, value_enum)]
    pub rule: Option<SelectionRule>,

    /// Select candidates but don't drop anything
    #[arg(long)]
    pub dry_run: bool,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,
}

/// Arguments for the `list` subcommand.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Path to configuration file (defaults to config.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override database file path
    #[arg(short, long)]
    pub database: Option<PathBuf>,

    /// Override selection rule
    #[arg(short, long, value_enum)]
    pub rule: Option<SelectionRule>,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,
}
