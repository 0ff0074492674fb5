//! Display configuration shared across commands

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::view::MoveOrder;

/// How a game view is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Board, status and move list as text
    #[default]
    Text,
    /// The full view as pretty-printed JSON
    Json,
}

/// Settings read from an optional TOML file.
///
/// ```toml
/// order = "descending"
/// format = "text"
/// show_help = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Initial move-list order
    pub order: MoveOrder,

    /// Output format for rendered views
    pub format: OutputFormat,

    /// Print the command summary when an interactive session starts
    pub show_help: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            order: MoveOrder::Ascending,
            format: OutputFormat::Text,
            show_help: true,
        }
    }
}

impl PlayConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the file cannot be read and
    /// [`crate::Error::Config`] if it is not valid configuration.
    pub fn from_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config");
        let content = std::fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read config file {}", path.display()),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        info!(order = %config.order, format = ?config.format, "config loaded");
        Ok(config)
    }

    /// Defaults, or the file's settings when a path is given
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides on top of file values
    pub fn with_overrides(mut self, order: Option<MoveOrder>, format: Option<OutputFormat>) -> Self {
        if let Some(order) = order {
            self.order = order;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}
