//! Tic-tac-toe with move history and time travel
//!
//! - `play`: interactive game; jump back to any earlier move and branch from it
//! - `replay`: play a fixed list of cells and print the resulting view
//! - `outcome`: classify a board given as text

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use tictactoe_history::cli::{
    commands::{outcome, play, replay},
    config::PlayConfig,
};

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Tic-tac-toe with move history and time travel", long_about = None)]
struct Cli {
    /// TOML file with display settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively
    Play(play::PlayArgs),

    /// Replay a list of cells and show the result
    Replay(replay::ReplayArgs),

    /// Report the outcome of a board
    Outcome(outcome::OutcomeArgs),
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = PlayConfig::load(cli.config.as_deref()).context("failed to load configuration")?;

    match cli.command {
        Commands::Play(args) => play::execute(args, config),
        Commands::Replay(args) => replay::execute(args, config),
        Commands::Outcome(args) => outcome::execute(args, config),
    }
}
