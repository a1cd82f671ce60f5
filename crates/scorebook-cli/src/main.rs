mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Args, Command};
use commands::OutputOptions;
use scorebook_core::Config;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Default to warn when RUST_LOG is unset
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("scorebook_cli=warn,scorebook_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load_or_default(&args.config)
        .with_context(|| format!("Failed to load config {:?}", args.config))?;
    let output = OutputOptions::resolve(&config, args.json, args.no_color);

    match args.command {
        Command::Check { input } => commands::check::run(&input, output),
        Command::Compare { left, right } => commands::compare::run(&left, &right, output),
        Command::Import { file } => commands::import::run(&file, output),
    }
}
