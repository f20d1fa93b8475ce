use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "gclient-guard",
    version,
    about = "Username block filtering toolkit for the gClient chat client"
)]
pub struct Cli {
    /// Application configuration directory (overrides the host default)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check whether a username would be blocked (exit code 1 when blocked)
    Check {
        /// The username to test against the loaded patterns
        username: String,
    },
    /// List the loaded patterns and any compile diagnostics
    Patterns,
    /// Print the raw pattern source text
    Source,
    /// Show or set the anti-spam mode
    Mode {
        /// New mode to persist; omit to print the current mode
        mode: Option<String>,
    },
}
