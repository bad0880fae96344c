//! Tic-tac-toe for two players sharing a terminal.

use anyhow::Result;
use clap::Parser;
use std::io;
use tictactoe_cli::{Cli, CliConfig, Command, Shell, render};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command() {
        Command::Guide => {
            println!("{}", render::position_guide());
            Ok(())
        }
        Command::Play {
            once,
            style,
            no_guide,
        } => {
            let config =
                CliConfig::load(cli.config.as_deref())?.with_overrides(style, no_guide, once);
            info!(?config, "Starting session");

            let stdin = io::stdin();
            let mut shell = Shell::new(stdin.lock(), io::stdout(), config);
            let results = shell.run()?;
            info!(games = results.len(), "Exiting");
            Ok(())
        }
    }
}
