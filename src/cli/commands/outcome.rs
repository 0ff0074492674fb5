//! Outcome command - classify a board given as text

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{
        config::{OutputFormat, PlayConfig},
        output::{write_kv, write_section},
    },
    tictactoe::{Board, Line, Outcome, detect_outcome, legal_moves},
};

#[derive(Parser, Debug)]
#[command(about = "Report the outcome of a board")]
pub struct OutcomeArgs {
    /// Nine cells, row-major, using X, O and '.' (whitespace ignored)
    pub board: String,

    /// Output format
    #[arg(long, short = 'f', value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Serialize)]
struct OutcomeReport {
    board: String,
    outcome: Outcome,
    winning_line: Option<Line>,
    legal_moves: Vec<usize>,
    reachable: bool,
}

impl OutcomeReport {
    fn new(board: &Board) -> Self {
        let outcome = detect_outcome(board);
        Self {
            board: board.encode(),
            outcome,
            winning_line: outcome.winning_line(),
            legal_moves: legal_moves(board),
            reachable: board.is_reachable(),
        }
    }
}

pub fn execute(args: OutcomeArgs, config: PlayConfig) -> Result<()> {
    let stdout = io::stdout();
    run(&args, &config, &mut stdout.lock())
}

pub fn run<W: Write>(args: &OutcomeArgs, config: &PlayConfig, out: &mut W) -> Result<()> {
    let board = Board::from_string(&args.board)
        .with_context(|| format!("cannot parse board '{}'", args.board))?;
    let report = OutcomeReport::new(&board);

    match args.format.unwrap_or(config.format) {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            write_section(out, "Board")?;
            writeln!(out, "{board}")?;
            write_section(out, "Outcome")?;
            let outcome = match report.outcome {
                Outcome::InProgress => "in progress".to_string(),
                Outcome::Win { mark, .. } => format!("{mark} wins"),
                Outcome::Draw => "draw".to_string(),
            };
            write_kv(out, "Outcome", &outcome)?;
            if let Some(line) = report.winning_line {
                write_kv(out, "Winning line", &format!("{line:?}"))?;
            }
            write_kv(out, "Legal moves", &format!("{:?}", report.legal_moves))?;
            write_kv(out, "Reachable", if report.reachable { "yes" } else { "no" })?;
        }
    }

    Ok(())
}
