//! Command-line interface for the tictactoe binary.

use crate::config::BoardStyle;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file (overrides TICTACTOE_CONFIG)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play games until someone declines a rematch
    Play {
        /// Play a single game without asking for a rematch
        #[arg(long)]
        once: bool,

        /// How empty squares are drawn
        #[arg(long, value_enum)]
        style: Option<BoardStyle>,

        /// Skip the position guide at the start of each game
        #[arg(long)]
        no_guide: bool,
    },

    /// Print the square numbering and exit
    Guide,
}

impl Cli {
    /// Returns the chosen command, falling back to a default `play`.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play {
            once: false,
            style: None,
            no_guide: false,
        })
    }
}
