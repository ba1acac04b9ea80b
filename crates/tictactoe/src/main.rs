//! tictactoe - terminal front end.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe::{AppConfig, Cli, Command, init_tracing, tui};
use tictactoe_engine::rules::WINNING_LINES;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command.unwrap_or_default() {
        Command::Play {
            first_player,
            glyphs,
        } => {
            let mut config = config;
            if let Some(first_player) = first_player {
                config = config.with_first_player(first_player);
            }
            if let Some(glyphs) = glyphs {
                config = config.with_glyphs(glyphs);
            }
            init_tracing(&config)?;
            tui::run_tui(config)
        }
        Command::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
        Command::Lines => {
            for (i, line) in WINNING_LINES.iter().enumerate() {
                let cells: Vec<String> = line
                    .iter()
                    .map(|p| format!("{} {}", p, p.label()))
                    .collect();
                println!("{}. {}", i + 1, cells.join(" | "));
            }
            Ok(())
        }
    }
}
