//! Play command - interactive game on stdin/stdout

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::{
    cli::{
        config::{OutputFormat, PlayConfig},
        output::write_view,
        session::{Command, Reply, Session, help_text},
    },
    view::MoveOrder,
};

#[derive(Parser, Debug)]
#[command(about = "Play a game interactively")]
pub struct PlayArgs {
    /// Initial move list order (ascending or descending)
    #[arg(long)]
    pub order: Option<MoveOrder>,

    /// Output format for the board after each command
    #[arg(long, short = 'f', value_enum)]
    pub format: Option<OutputFormat>,

    /// Do not print the command summary at start
    #[arg(long)]
    pub quiet: bool,
}

pub fn execute(args: PlayArgs, config: PlayConfig) -> Result<()> {
    let mut config = config.with_overrides(args.order, args.format);
    if args.quiet {
        config.show_help = false;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(stdin.lock(), stdout.lock(), &config)
}

/// Drive a session from `input` until `quit` or end of input
pub fn run<R: BufRead, W: Write>(input: R, mut out: W, config: &PlayConfig) -> Result<()> {
    let mut session = Session::new(config.order);

    if config.show_help {
        writeln!(out, "{}\n", help_text())?;
    }
    write_view(&mut out, &session.view(), config.format)?;

    for line in input.lines() {
        let line = line.context("failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };
        debug!(?command, "command");

        match session.apply(command) {
            Reply::Updated => write_view(&mut out, &session.view(), config.format)?,
            Reply::Unchanged => {}
            Reply::Notice(message) => writeln!(out, "{message}")?,
            Reply::Help => writeln!(out, "{}", help_text())?,
            Reply::Quit => break,
        }
        out.flush()?;
    }

    Ok(())
}
