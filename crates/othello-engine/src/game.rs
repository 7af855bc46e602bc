//! Full game management with turn sequencing and history tracking.
//!
//! [`Board`] and the movegen functions are stateless with respect to
//! turns; [`Game`] layers the current player, the move history, and
//! terminal detection on top, which is exactly the state a driving
//! session needs to hold.

use crate::movegen::{apply_move, generate_moves, has_legal_move, MoveList};
use crate::rules::{game_result, is_game_over, GameResult};
use crate::Board;
use othello_core::{Color, NotationError, NotationParser, Square};
use thiserror::Error;

/// An action taken on a turn: place a disc or pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place a disc on the square, flipping captured runs.
    Place(Square),
    /// Forfeit the turn; only legal when no placement is.
    Pass,
}

/// A recorded turn in game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameMove {
    /// The player who acted.
    pub color: Color,
    /// What they did.
    pub action: Action,
}

/// Error type for game operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// The square is not a legal move for the player to move.
    #[error("illegal move: {0}")]
    IllegalMove(Square),
    /// The player to move has a legal placement and may not pass.
    #[error("cannot pass: legal moves are available")]
    CannotPass,
    /// The game has already ended.
    #[error("game has already ended")]
    GameAlreadyOver,
    /// The position notation could not be parsed.
    #[error("invalid notation: {0}")]
    InvalidNotation(#[from] NotationError),
}

/// A complete Othello game.
///
/// Unlike [`Board`], which represents a single position, `Game` tracks
/// whose turn it is, the actions played, and whether the game has
/// ended.
#[derive(Debug, Clone)]
pub struct Game {
    /// Current position.
    board: Board,
    /// The player to move.
    to_move: Color,
    /// Actions played so far.
    moves: Vec<GameMove>,
    /// Game result once the game has ended.
    result: Option<GameResult>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game from the standard starting position, Black to
    /// move.
    pub fn new() -> Self {
        Self::from_parts(Board::startpos(), Color::Black)
    }

    /// Creates a game from an arbitrary position.
    pub fn from_parts(board: Board, to_move: Color) -> Self {
        let mut game = Game {
            board,
            to_move,
            moves: Vec::new(),
            result: None,
        };
        // The position may already be terminal
        game.check_game_end();
        game
    }

    /// Creates a game from position notation (e.g.
    /// "8/8/8/3wb3/3bw3/8/8/8 b").
    pub fn from_notation(notation: &str) -> Result<Self, GameError> {
        let parsed = NotationParser::parse(notation)?;
        let board = Board::from_placement(&parsed.placement)?;
        Ok(Self::from_parts(board, parsed.active_color))
    }

    /// Returns the current position as notation.
    pub fn to_notation(&self) -> String {
        format!("{} {}", self.board.placement(), self.to_move.to_char())
    }

    /// Returns a reference to the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// Returns all legal moves for the player to move.
    pub fn legal_moves(&self) -> MoveList {
        generate_moves(&self.board, self.to_move)
    }

    /// Returns true if the player to move has no legal placement while
    /// the game is still live.
    pub fn must_pass(&self) -> bool {
        self.result.is_none() && !has_legal_move(&self.board, self.to_move)
    }

    /// Returns `(black_count, white_count)`.
    pub fn score(&self) -> (u8, u8) {
        self.board.counts()
    }

    /// Returns the game result if the game is over.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Returns true if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    /// Returns the action history.
    pub fn move_history(&self) -> &[GameMove] {
        &self.moves
    }

    /// Returns the number of actions played (placements and passes).
    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }

    /// Places a disc for the player to move.
    pub fn make_move(&mut self, sq: Square) -> Result<(), GameError> {
        if self.result.is_some() {
            return Err(GameError::GameAlreadyOver);
        }

        if !apply_move(&mut self.board, self.to_move, sq) {
            return Err(GameError::IllegalMove(sq));
        }

        self.moves.push(GameMove {
            color: self.to_move,
            action: Action::Place(sq),
        });
        self.to_move = self.to_move.opposite();
        self.check_game_end();
        Ok(())
    }

    /// Passes the turn for the player to move.
    ///
    /// Passing is only legal when no placement is available.
    pub fn pass(&mut self) -> Result<(), GameError> {
        if self.result.is_some() {
            return Err(GameError::GameAlreadyOver);
        }
        if has_legal_move(&self.board, self.to_move) {
            return Err(GameError::CannotPass);
        }

        self.moves.push(GameMove {
            color: self.to_move,
            action: Action::Pass,
        });
        self.to_move = self.to_move.opposite();
        self.check_game_end();
        Ok(())
    }

    /// Caches the result once neither player can move.
    fn check_game_end(&mut self) {
        if is_game_over(&self.board) {
            self.result = game_result(&self.board);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(algebraic: &str) -> Square {
        Square::from_algebraic(algebraic).unwrap()
    }

    #[test]
    fn new_game() {
        let game = Game::new();
        assert_eq!(game.to_move(), Color::Black);
        assert_eq!(game.score(), (2, 2));
        assert_eq!(game.ply_count(), 0);
        assert!(!game.is_game_over());
        assert!(!game.must_pass());
    }

    #[test]
    fn make_move() {
        let mut game = Game::new();
        game.make_move(sq("d3")).unwrap();

        assert_eq!(game.to_move(), Color::White);
        assert_eq!(game.score(), (4, 1));
        assert_eq!(game.ply_count(), 1);
        assert_eq!(
            game.move_history()[0],
            GameMove {
                color: Color::Black,
                action: Action::Place(sq("d3")),
            }
        );
    }

    #[test]
    fn illegal_move() {
        let mut game = Game::new();
        let before = *game.board();

        let result = game.make_move(sq("a1"));
        assert_eq!(result, Err(GameError::IllegalMove(sq("a1"))));
        assert_eq!(*game.board(), before);
        assert_eq!(game.to_move(), Color::Black);
        assert_eq!(game.ply_count(), 0);
    }

    #[test]
    fn cannot_pass_with_moves_available() {
        let mut game = Game::new();
        assert_eq!(game.pass(), Err(GameError::CannotPass));
        assert_eq!(game.to_move(), Color::Black);
    }

    #[test]
    fn forced_pass() {
        // White holds the corner; Black has nothing to capture, White
        // can still play c1.
        let mut game = Game::from_notation("wb6/8/8/8/8/8/8/8 b").unwrap();
        assert!(!game.is_game_over());
        assert!(game.must_pass());

        game.pass().unwrap();
        assert_eq!(game.to_move(), Color::White);
        assert!(!game.must_pass());
        assert!(game.legal_moves().contains(sq("c1")));
    }

    #[test]
    fn terminal_position_at_construction() {
        let game = Game::from_notation("bbbbbbbb/8/8/8/8/8/8/8 b").unwrap();
        assert!(game.is_game_over());
        assert_eq!(game.result(), Some(GameResult::BlackWins));
    }

    #[test]
    fn no_actions_after_game_over() {
        let mut game = Game::from_notation("bbbbbbbb/8/8/8/8/8/8/8 b").unwrap();
        assert_eq!(game.make_move(sq("a2")), Err(GameError::GameAlreadyOver));
        assert_eq!(game.pass(), Err(GameError::GameAlreadyOver));
    }

    #[test]
    fn notation_roundtrip() {
        let game = Game::new();
        assert_eq!(game.to_notation(), NotationParser::STARTPOS);

        let mut game = Game::new();
        game.make_move(sq("d3")).unwrap();
        let reloaded = Game::from_notation(&game.to_notation()).unwrap();
        assert_eq!(reloaded.board(), game.board());
        assert_eq!(reloaded.to_move(), Color::White);
    }

    #[test]
    fn rejects_bad_notation() {
        assert!(matches!(
            Game::from_notation("8/8/8 b"),
            Err(GameError::InvalidNotation(_))
        ));
    }
}
