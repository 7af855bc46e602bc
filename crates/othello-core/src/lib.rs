//! Core types for Othello.
//!
//! This crate provides the fundamental types used across the Othello engine:
//! - [`Color`] for the two players
//! - [`Square`], [`Col`], and [`Row`] for board coordinates
//! - Position notation parsing and serialization

mod color;
mod notation;
mod square;

pub use color::Color;
pub use notation::{NotationError, NotationParser};
pub use square::{Col, Row, Square};
