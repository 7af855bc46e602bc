//! Board notation parsing and serialization.
//!
//! A position is written as a placement field and an active color field,
//! separated by a space. The placement lists the 8 rows top to bottom,
//! separated by '/': 'b' and 'w' for discs, digits 1-8 for runs of empty
//! squares. The active color is 'b' or 'w'.
//!
//! The starting position is `"8/8/8/3wb3/3bw3/8/8/8 b"`.

use crate::Color;
use thiserror::Error;

/// Errors that can occur when parsing position notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid notation: expected 2 fields, got {0}")]
    InvalidFieldCount(usize),

    #[error("invalid placement: {0}")]
    InvalidPlacement(String),

    #[error("invalid active color: expected 'b' or 'w', got '{0}'")]
    InvalidActiveColor(String),
}

/// Parsed position notation.
///
/// This struct holds the validated notation fields. The engine is
/// responsible for converting the placement into its internal board
/// representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotationParser {
    /// Placement string (e.g., "8/8/8/3wb3/3bw3/8/8/8")
    pub placement: String,
    /// The color to move.
    pub active_color: Color,
}

impl NotationParser {
    /// The standard starting position.
    pub const STARTPOS: &'static str = "8/8/8/3wb3/3bw3/8/8/8 b";

    /// Parses a position notation string.
    pub fn parse(notation: &str) -> Result<Self, NotationError> {
        let fields: Vec<&str> = notation.split_whitespace().collect();

        if fields.len() != 2 {
            return Err(NotationError::InvalidFieldCount(fields.len()));
        }

        let placement = fields[0];
        Self::validate_placement(placement)?;

        let active_color = match fields[1] {
            "b" => Color::Black,
            "w" => Color::White,
            other => return Err(NotationError::InvalidActiveColor(other.to_string())),
        };

        Ok(NotationParser {
            placement: placement.to_string(),
            active_color,
        })
    }

    fn validate_placement(placement: &str) -> Result<(), NotationError> {
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(NotationError::InvalidPlacement(format!(
                "expected 8 rows, got {}",
                rows.len()
            )));
        }

        for (i, row) in rows.iter().enumerate() {
            let mut squares = 0;
            for c in row.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if digit == 0 || digit > 8 {
                        return Err(NotationError::InvalidPlacement(format!(
                            "invalid run length '{}' in row {}",
                            c,
                            i + 1
                        )));
                    }
                    squares += digit;
                } else if Color::from_char(c).is_some() {
                    squares += 1;
                } else {
                    return Err(NotationError::InvalidPlacement(format!(
                        "invalid character '{}' in row {}",
                        c,
                        i + 1
                    )));
                }
            }
            if squares != 8 {
                return Err(NotationError::InvalidPlacement(format!(
                    "row {} has {} squares, expected 8",
                    i + 1,
                    squares
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_startpos() {
        let parsed = NotationParser::parse(NotationParser::STARTPOS).unwrap();
        assert_eq!(parsed.placement, "8/8/8/3wb3/3bw3/8/8/8");
        assert_eq!(parsed.active_color, Color::Black);
    }

    #[test]
    fn parse_white_to_move() {
        let parsed = NotationParser::parse("8/8/8/3wb3/3bw3/8/8/8 w").unwrap();
        assert_eq!(parsed.active_color, Color::White);
    }

    #[test]
    fn reject_wrong_field_count() {
        assert_eq!(
            NotationParser::parse("8/8/8/3wb3/3bw3/8/8/8"),
            Err(NotationError::InvalidFieldCount(1))
        );
        assert!(matches!(
            NotationParser::parse("8/8/8/3wb3/3bw3/8/8/8 b extra"),
            Err(NotationError::InvalidFieldCount(3))
        ));
    }

    #[test]
    fn reject_wrong_row_count() {
        assert!(matches!(
            NotationParser::parse("8/8/8/8 b"),
            Err(NotationError::InvalidPlacement(_))
        ));
    }

    #[test]
    fn reject_short_row() {
        assert!(matches!(
            NotationParser::parse("8/8/8/3wb2/3bw3/8/8/8 b"),
            Err(NotationError::InvalidPlacement(_))
        ));
    }

    #[test]
    fn reject_bad_character() {
        assert!(matches!(
            NotationParser::parse("8/8/8/3xb3/3bw3/8/8/8 b"),
            Err(NotationError::InvalidPlacement(_))
        ));
    }

    #[test]
    fn reject_zero_run() {
        assert!(matches!(
            NotationParser::parse("8/8/8/0wb33/3bw3/8/8/8 b"),
            Err(NotationError::InvalidPlacement(_))
        ));
    }

    #[test]
    fn reject_bad_active_color() {
        assert_eq!(
            NotationParser::parse("8/8/8/3wb3/3bw3/8/8/8 x"),
            Err(NotationError::InvalidActiveColor("x".to_string()))
        );
    }
}
