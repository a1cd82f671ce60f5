//! CLI argument definitions for scorebook.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "scorebook")]
#[command(about = "Validate, compare and list dated scores", version)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, env = "SCOREBOOK_CONFIG", default_value = "scorebook.json")]
    pub config: PathBuf,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse one score and print it
    Check {
        /// Score in prefix form, e.g. "n/Midterm v/85 d/2024-03-15 14:30"
        input: String,
    },
    /// Parse two scores and report whether they are the same
    Compare {
        /// First score in prefix form
        left: String,
        /// Second score in prefix form
        right: String,
    },
    /// Read scores from a file (one per line, prefix form) and list them by date
    Import {
        /// Input file path
        file: PathBuf,
    },
}
