//! Othello rules engine.
//!
//! This crate provides:
//! - [`Board`] - 8x8 grid of three-valued cells with the standard start
//! - Legal move generation and move application with flipping
//! - Terminal-state detection and scoring
//! - [`Game`] - complete game management with turn sequencing and history
//!
//! # Architecture
//!
//! The engine is stateless with respect to turns: [`Board`] plus a
//! [`Color`](othello_core::Color) passed by the caller is enough for
//! every rule query, and [`apply_move`] mutates the board in place only
//! after re-validating the move. [`Game`] layers the current player,
//! history, and cached result on top for callers that want a session.
//!
//! # Example
//!
//! ```
//! use othello_core::{Color, Square};
//! use othello_engine::{generate_moves, Board, Game};
//!
//! // Using Board directly (stateless)
//! let board = Board::startpos();
//! let moves = generate_moves(&board, Color::Black);
//! println!("Legal moves from the starting position: {}", moves.len());
//!
//! // Using Game for full game management
//! let mut game = Game::new();
//! game.make_move(Square::from_algebraic("d3").unwrap()).unwrap();
//! println!("Position after 1. d3: {}", game.to_notation());
//! ```

mod board;
mod game;
pub mod movegen;
pub mod rules;

pub use board::Board;
pub use game::{Action, Game, GameError, GameMove};
pub use movegen::{
    apply_move, generate_moves, has_legal_move, is_legal_move, MoveList, DIRECTIONS,
};
pub use rules::{game_result, is_game_over, GameResult};
