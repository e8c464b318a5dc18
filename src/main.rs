use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use rlp_rust::cli::{run, Command};
use rlp_rust::{client_version, Config};

#[derive(Parser)]
#[command(name = "rlp")]
#[command(about = "Encode and decode Recursive Length Prefix data", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Overrides the configured log level
    #[arg(short, long, global = true)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => Config::default(),
    };

    // Initialize logging
    let level = cli.log_level.as_deref().unwrap_or(&config.log.level);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.log.ansi)
        .with_writer(std::io::stderr)
        .init();

    debug!("{}", client_version());

    let output = run(&cli.command, &config)?;
    println!("{}", output);

    Ok(())
}
