//! Application configuration.
//!
//! Settings come from an optional TOML file; command-line flags override
//! individual fields afterwards.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_engine::{Board, Mark};
use tracing::{debug, info, instrument};

/// Which mark moves first in each new game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FirstPlayer {
    /// Pick uniformly at random for every game.
    #[default]
    Random,
    /// X always starts.
    X,
    /// O always starts.
    O,
}

impl FirstPlayer {
    /// Creates an empty board honouring this setting.
    #[instrument]
    pub fn new_board(self) -> Board {
        match self {
            Self::Random => Board::create(),
            Self::X => Board::with_first_player(Mark::X),
            Self::O => Board::with_first_player(Mark::O),
        }
    }
}

/// How marks are drawn on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GlyphStyle {
    /// Plain `X` and `O`.
    #[default]
    Ascii,
    /// Cross and circle emoji.
    Emoji,
}

impl GlyphStyle {
    /// Returns the symbol drawn for `mark`.
    pub fn glyph(self, mark: Mark) -> &'static str {
        match (self, mark) {
            (Self::Ascii, Mark::X) => "X",
            (Self::Ascii, Mark::O) => "O",
            (Self::Emoji, Mark::X) => "\u{274C}",
            (Self::Emoji, Mark::O) => "\u{2B55}",
        }
    }
}

/// Runtime configuration for the terminal game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct AppConfig {
    /// Who moves first in each new game.
    first_player: FirstPlayer,

    /// Mark symbols.
    glyphs: GlyphStyle,

    /// File receiving log output (the terminal belongs to the UI).
    log_file: PathBuf,

    /// Default `tracing` filter when `RUST_LOG` is unset.
    log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            first_player: FirstPlayer::default(),
            glyphs: GlyphStyle::default(),
            log_file: PathBuf::from("tictactoe.log"),
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Config file looked up when `--config` is not given.
    pub const DEFAULT_PATH: &'static str = "tictactoe.toml";

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(first_player = %config.first_player, glyphs = %config.glyphs, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Serializes the configuration back to TOML.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
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
    /// Creates a new configuration error at the caller's location.
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
