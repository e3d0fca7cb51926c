//! Varnika CLI - Command-line interface for Gujarati subword models.
//!
//! This is the main entry point for the `varnika` command-line tool.

mod commands;

use clap::{ArgAction, Parser, Subcommand};
use commands::{EncodeCommand, TrainCommand};
use anyhow::Context;
use env_logger::Env;
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "varnika")]
#[command(about = "Subword vocabulary training and encoding for Gujarati text", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (-q, -qq)
    #[arg(short = 'q', long, global = true, action = ArgAction::Count)]
    quiet: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a subword model from a text corpus
    Train(TrainCommand),
    /// Encode text with a trained model
    Encode(EncodeCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet)?;

    match cli.command {
        Commands::Train(cmd) => commands::train::run(cmd)?,
        Commands::Encode(cmd) => commands::encode::run(cmd)?,
    }

    Ok(())
}

/// `-v`/`-q` set the level explicitly; otherwise `RUST_LOG` applies, defaulting to info.
fn init_logging(verbose: u8, quiet: u8) -> anyhow::Result<()> {
    let mut builder = match log_level(verbose, quiet) {
        Some(level) => {
            let mut builder = env_logger::Builder::new();
            builder.filter_level(level);
            builder
        }
        None => env_logger::Builder::from_env(Env::default().default_filter_or("info")),
    };
    builder.format_timestamp_millis();
    builder
        .try_init()
        .context("failed to initialize logging")
}

fn log_level(verbose: u8, quiet: u8) -> Option<LevelFilter> {
    match (quiet, verbose) {
        (0, 0) => None,
        (0, 1) => Some(LevelFilter::Debug),
        (0, _) => Some(LevelFilter::Trace),
        (1, _) => Some(LevelFilter::Warn),
        _ => Some(LevelFilter::Error),
    }
}
