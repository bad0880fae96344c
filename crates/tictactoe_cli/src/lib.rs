//! Terminal shell for two-player tic-tac-toe.
//!
//! Everything here is I/O around the [`tictactoe`] core: command-line
//! parsing, settings, rendering, and the prompt loop.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod render;
pub mod shell;

pub use cli::{Cli, Command};
pub use config::{BoardStyle, CliConfig, ConfigError};
pub use shell::{InputError, Shell, parse_square};
