//! Interactive console loop: prompt, play, announce, offer a rematch.

use crate::config::CliConfig;
use crate::render;
use derive_more::{Display, Error};
use std::io::{self, BufRead, Write};
use tictactoe::{Game, GameStatus, Position};
use tracing::{debug, info, instrument, warn};

/// Why a line typed at the move prompt could not be read as a square.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Nothing but whitespace was entered.
    #[display("No square entered")]
    Empty,
    /// The text is not an integer.
    #[display("Not a number: {:?}", _0)]
    NotANumber(#[error(not(source))] String),
}

/// Parses a 1-based square number into the 0-based index the game expects.
///
/// Only the number format is checked here; the game decides whether the
/// resulting index is on the board.
pub fn parse_square(line: &str) -> Result<isize, InputError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    trimmed
        .parse::<i64>()
        .map(Position::one_based_to_index)
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))
}

/// Terminal front end over any line-based reader and writer.
pub struct Shell<R, W> {
    input: R,
    output: W,
    config: CliConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell reading moves from `input` and drawing to `output`.
    pub fn new(input: R, output: W, config: CliConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Consumes the shell and returns the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompts and reads one line; `None` at end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        match self.input.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }

    /// Plays one game to completion.
    ///
    /// Returns the final status, or `None` if input ran out mid-game.
    #[instrument(skip(self))]
    pub fn play_game(&mut self) -> io::Result<Option<GameStatus>> {
        let mut game = Game::new();
        if *self.config.show_position_guide() {
            writeln!(self.output, "{}\n", render::position_guide())?;
        }

        loop {
            let board = render::board(game.state(), *self.config.board_style());
            writeln!(self.output, "\n{board}\n")?;

            let Some(line) = self.ask(&render::prompt(game.to_move()))? else {
                writeln!(self.output)?;
                info!("Input closed mid-game");
                return Ok(None);
            };

            let index = match parse_square(&line) {
                Ok(index) => index,
                Err(e) => {
                    debug!(error = %e, "Unreadable move");
                    writeln!(self.output, "Please enter a number from 1 to 9.")?;
                    continue;
                }
            };

            match game.play(index) {
                Ok(GameStatus::InProgress) => {}
                Ok(status) => {
                    let board = render::board(game.state(), *self.config.board_style());
                    writeln!(self.output, "\n{board}\n")?;
                    if let Some(message) = render::outcome(status) {
                        writeln!(self.output, "{message}")?;
                    }
                    return Ok(Some(status));
                }
                Err(e) => {
                    debug!(error = %e, "Move refused");
                    writeln!(self.output, "That square is not available. Try again.")?;
                }
            }
        }
    }

    /// Asks whether to play again; only `y` or `yes` counts as consent.
    fn wants_rematch(&mut self) -> io::Result<bool> {
        let answer = self.ask("\nPlay again? (y/n): ")?;
        Ok(answer.is_some_and(|a| matches!(a.trim().to_lowercase().as_str(), "y" | "yes")))
    }

    /// Plays games until the players decline a rematch or input ends.
    ///
    /// Returns the status of every finished game in order.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> io::Result<Vec<GameStatus>> {
        writeln!(self.output, "Welcome to Tic-Tac-Toe!")?;
        let mut results = Vec::new();

        while let Some(status) = self.play_game()? {
            results.push(status);
            if !*self.config.ask_replay() || !self.wants_rematch()? {
                break;
            }
        }

        if results.is_empty() {
            warn!("Session ended before any game finished");
        }
        info!(games = results.len(), "Session over");
        writeln!(self.output, "Thanks for playing!")?;
        Ok(results)
    }
}
