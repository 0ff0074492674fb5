//! Output formatting for CLI commands

use std::io::Write;

use anyhow::{Context, Result};

use super::config::OutputFormat;
use crate::view::GameView;

/// Write a view in the requested format
pub fn write_view<W: Write>(out: &mut W, view: &GameView, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => write!(out, "{view}"),
        OutputFormat::Json => writeln!(out, "{}", view.to_json()?),
    }
    .context("failed to write game view")
}

/// Print a section header
pub fn write_section<W: Write>(out: &mut W, title: &str) -> Result<()> {
    writeln!(out, "\n{}", "=".repeat(40))?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(40))?;
    Ok(())
}

/// Print a key-value pair
pub fn write_kv<W: Write>(out: &mut W, key: &str, value: &str) -> Result<()> {
    writeln!(out, "  {:16} {}", format!("{key}:"), value)?;
    Ok(())
}
