//! Command-line interface for tictactoe.

use crate::config::{AppConfig, FirstPlayer, GlyphStyle};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (ignored if missing)
    #[arg(short, long, global = true, default_value = AppConfig::DEFAULT_PATH)]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Who moves first in each game
        #[arg(long, value_enum)]
        first_player: Option<FirstPlayer>,

        /// How marks are drawn
        #[arg(long, value_enum)]
        glyphs: Option<GlyphStyle>,
    },

    /// Print the effective configuration as TOML
    Config,

    /// List the eight winning lines
    Lines,
}

impl Default for Command {
    fn default() -> Self {
        Self::Play {
            first_player: None,
            glyphs: None,
        }
    }
}
