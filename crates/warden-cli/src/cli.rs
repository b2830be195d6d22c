//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Warden CLI - Drive the POI claim arbiter offline.
#[derive(Debug, Parser)]
#[command(name = "warden")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path (same format as the server)
    #[arg(short, long, global = true, env = "WARDEN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send a single chat line and print the reply
    Say(SayArgs),

    /// Show the POI catalog
    Catalog,

    /// Enter interactive console mode
    Repl,
}

/// Arguments for the say command.
#[derive(Debug, Parser)]
pub struct SayArgs {
    /// Player name
    pub player: String,

    /// Chat message
    #[arg(required = true, num_args = 1..)]
    pub message: Vec<String>,
}
