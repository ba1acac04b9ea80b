//! Two-player tic-tac-toe in the terminal.
//!
//! The rules live in [`tictactoe_engine`]; this crate is the presentation
//! layer around them.
//!
//! # Architecture
//!
//! - **Config**: optional TOML file plus command-line overrides
//! - **Logging**: `tracing` output written to a log file
//! - **TUI**: ratatui front end that owns the live board

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError, FirstPlayer, GlyphStyle};
pub use logging::init_tracing;
