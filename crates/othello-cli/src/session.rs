//! Interactive two-player session over line-based I/O.
//!
//! The session is generic over its reader and writer so the full loop
//! can be exercised in tests with scripted input.

use std::io::{self, BufRead, Write};

use othello_core::Square;
use othello_engine::{Game, GameResult};
use thiserror::Error;

/// Errors parsing a line of player input.
///
/// These never reach the engine; the session re-prompts on every one.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Input did not parse into two integers.
    #[error("expected two numbers or 'q'")]
    Malformed,
    /// Numbers parsed but lie outside 1-8.
    #[error("coordinates must be between 1 and 8")]
    OutOfRange,
}

/// A parsed player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a disc on the square.
    Place(Square),
    /// Abort the session.
    Quit,
}

/// Parses one line of player input.
///
/// Moves are entered as two 1-based numbers, "row col"; 'q'
/// (case-insensitive) quits. Coordinates are translated to 0-based
/// squares here, before the engine is involved.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("q") {
        return Ok(Command::Quit);
    }

    let mut parts = trimmed.split_whitespace();
    let row = parts.next().ok_or(ParseError::Malformed)?;
    let col = parts.next().ok_or(ParseError::Malformed)?;
    if parts.next().is_some() {
        return Err(ParseError::Malformed);
    }

    let row: usize = row.parse().map_err(|_| ParseError::Malformed)?;
    let col: usize = col.parse().map_err(|_| ParseError::Malformed)?;
    if row == 0 || col == 0 {
        return Err(ParseError::OutOfRange);
    }
    Square::from_coords(row - 1, col - 1)
        .map(Command::Place)
        .ok_or(ParseError::OutOfRange)
}

/// Runs a human-vs-human game: renders the board, prompts each player
/// in turn, skips stuck players, and announces the result.
pub struct Session<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    hints: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(reader: R, writer: W, hints: bool) -> Self {
        Self {
            reader,
            writer,
            hints,
        }
    }

    /// Plays a full game.
    ///
    /// Returns the result, or `None` when a player quit (or input
    /// reached end-of-file).
    pub fn run(&mut self) -> io::Result<Option<GameResult>> {
        let mut game = Game::new();

        while !game.is_game_over() {
            self.render(&game)?;

            if game.must_pass() {
                writeln!(
                    self.writer,
                    "{} has no valid moves, skipping turn.",
                    game.to_move()
                )?;
                if game.pass().is_err() {
                    // unreachable: must_pass checked the game is live
                    // with no placement available
                    break;
                }
                continue;
            }

            if self.hints {
                let moves: Vec<String> = game
                    .legal_moves()
                    .as_slice()
                    .iter()
                    .map(|sq| sq.to_algebraic())
                    .collect();
                writeln!(self.writer, "Valid moves: {}", moves.join(" "))?;
            }

            write!(
                self.writer,
                "{}'s move (row col) or 'q' to quit: ",
                game.to_move()
            )?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                writeln!(self.writer, "Game aborted.")?;
                return Ok(None);
            }

            match parse_command(&line) {
                Ok(Command::Quit) => {
                    writeln!(self.writer, "Game aborted.")?;
                    return Ok(None);
                }
                Ok(Command::Place(sq)) => {
                    let mover = game.to_move();
                    if game.make_move(sq).is_err() {
                        writeln!(self.writer, "Invalid move. Try again.")?;
                    } else {
                        tracing::debug!(square = %sq, color = %mover, "move applied");
                    }
                }
                Err(err) => {
                    writeln!(self.writer, "Invalid input. Please enter row and column numbers.")?;
                    tracing::debug!(%err, "input rejected");
                }
            }
        }

        self.render(&game)?;
        match game.result() {
            Some(GameResult::BlackWins) => writeln!(self.writer, "Black wins!")?,
            Some(GameResult::WhiteWins) => writeln!(self.writer, "White wins!")?,
            Some(GameResult::Draw) => writeln!(self.writer, "Draw!")?,
            None => {}
        }
        Ok(game.result())
    }

    /// Prints the board with its score line.
    fn render(&mut self, game: &Game) -> io::Result<()> {
        let (black, white) = game.score();
        write!(self.writer, "{}", game.board())?;
        writeln!(self.writer, "Score -> B: {} W: {}", black, white)?;
        writeln!(self.writer)?;
        Ok(())
    }
}
