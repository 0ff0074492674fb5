//! Replay command - play a fixed sequence of cells and show the result

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use crate::{
    cli::{
        config::{OutputFormat, PlayConfig},
        output::write_view,
    },
    history::GameHistory,
    view::{GameView, MoveOrder},
};

#[derive(Parser, Debug)]
#[command(about = "Replay a sequence of moves")]
pub struct ReplayArgs {
    /// Cells to play in order (0-8, row-major); illegal ones are skipped
    pub cells: Vec<usize>,

    /// Step to display after replaying (0 = game start)
    #[arg(long, short = 'j')]
    pub jump: Option<usize>,

    /// Move list order (ascending or descending)
    #[arg(long)]
    pub order: Option<MoveOrder>,

    /// Output format
    #[arg(long, short = 'f', value_enum)]
    pub format: Option<OutputFormat>,
}

pub fn execute(args: ReplayArgs, config: PlayConfig) -> Result<()> {
    let stdout = io::stdout();
    run(&args, &config, &mut stdout.lock())
}

pub fn run<W: Write>(args: &ReplayArgs, config: &PlayConfig, out: &mut W) -> Result<()> {
    let config = config.clone().with_overrides(args.order, args.format);

    let (mut history, rejected) = GameHistory::from_moves(args.cells.iter().copied());
    if rejected > 0 {
        warn!(rejected, "some cells were illegal and had no effect");
    }
    info!(moves = history.len() - 1, "replayed");

    if let Some(step) = args.jump {
        history
            .jump_to(step)
            .with_context(|| format!("cannot jump to step {step}"))?;
    }

    write_view(out, &GameView::from_history(&history, config.order), config.format)
}
