//! Shell settings loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Environment variable naming the settings file.
pub const CONFIG_ENV_VAR: &str = "TICTACTOE_CONFIG";

/// How empty squares are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BoardStyle {
    /// Empty squares are blank.
    Blank,
    /// Empty squares show the number that selects them.
    #[default]
    Numbered,
}

/// User-configurable settings for the shell.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// How empty squares are drawn.
    board_style: BoardStyle,

    /// Print the 1-9 square numbering before each game.
    show_position_guide: bool,

    /// Offer a rematch after each game.
    ask_replay: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            board_style: BoardStyle::Numbered,
            show_position_guide: true,
            ask_replay: true,
        }
    }
}

impl CliConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves settings from an explicit path, then `TICTACTOE_CONFIG`,
    /// then built-in defaults.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides on top of file settings.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, style: Option<BoardStyle>, no_guide: bool, once: bool) -> Self {
        if let Some(style) = style {
            self.board_style = style;
        }
        if no_guide {
            self.show_position_guide = false;
        }
        if once {
            self.ask_replay = false;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
