//! Board square representation.

use std::fmt;

/// A column on the Othello board, from A to H.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Col {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl Col {
    /// All columns in order.
    pub const ALL: [Col; 8] = [
        Col::A,
        Col::B,
        Col::C,
        Col::D,
        Col::E,
        Col::F,
        Col::G,
        Col::H,
    ];

    /// Creates a column from index (0-7).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Col::A),
            1 => Some(Col::B),
            2 => Some(Col::C),
            3 => Some(Col::D),
            4 => Some(Col::E),
            5 => Some(Col::F),
            6 => Some(Col::G),
            7 => Some(Col::H),
            _ => None,
        }
    }

    /// Creates a column from a character ('a'-'h' or 'A'-'H').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'a' => Some(Col::A),
            'b' => Some(Col::B),
            'c' => Some(Col::C),
            'd' => Some(Col::D),
            'e' => Some(Col::E),
            'f' => Some(Col::F),
            'g' => Some(Col::G),
            'h' => Some(Col::H),
            _ => None,
        }
    }

    /// Returns the index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the character representation.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl fmt::Display for Col {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A row on the Othello board, from 1 to 8.
///
/// Row 1 is the top row of the board as conventionally diagrammed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Row {
    R1 = 0,
    R2 = 1,
    R3 = 2,
    R4 = 3,
    R5 = 4,
    R6 = 5,
    R7 = 6,
    R8 = 7,
}

impl Row {
    /// All rows in order, top to bottom.
    pub const ALL: [Row; 8] = [
        Row::R1,
        Row::R2,
        Row::R3,
        Row::R4,
        Row::R5,
        Row::R6,
        Row::R7,
        Row::R8,
    ];

    /// Creates a row from index (0-7).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Row::R1),
            1 => Some(Row::R2),
            2 => Some(Row::R3),
            3 => Some(Row::R4),
            4 => Some(Row::R5),
            5 => Some(Row::R6),
            6 => Some(Row::R7),
            7 => Some(Row::R8),
            _ => None,
        }
    }

    /// Creates a row from a character ('1'-'8').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '1' => Some(Row::R1),
            '2' => Some(Row::R2),
            '3' => Some(Row::R3),
            '4' => Some(Row::R4),
            '5' => Some(Row::R5),
            '6' => Some(Row::R6),
            '7' => Some(Row::R7),
            '8' => Some(Row::R8),
            _ => None,
        }
    }

    /// Returns the index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the character representation.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'1' + self as u8) as char
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A square on the Othello board, indexed 0-63.
///
/// Squares are indexed row-major from the top-left corner:
/// - a1 = 0, b1 = 1, ..., h1 = 7
/// - a2 = 8, ..., h8 = 63
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    /// Creates a square from row and column.
    #[inline]
    pub const fn new(row: Row, col: Col) -> Self {
        Square(row.index() * 8 + col.index())
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Creates a square from 0-based row and column coordinates.
    ///
    /// Returns `None` when either coordinate is outside the board.
    #[inline]
    pub const fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square((row * 8 + col) as u8))
        } else {
            None
        }
    }

    /// Parses a square from algebraic notation (e.g., "d3").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let col = match Col::from_char(bytes[0] as char) {
            Some(c) => c,
            None => return None,
        };
        let row = match Row::from_char(bytes[1] as char) {
            Some(r) => r,
            None => return None,
        };
        Some(Square::new(row, col))
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the row of this square.
    #[inline]
    pub const fn row(self) -> Row {
        // SAFETY: self.0 / 8 is always in 0-7
        match Row::from_index(self.0 / 8) {
            Some(r) => r,
            None => unreachable!(),
        }
    }

    /// Returns the column of this square.
    #[inline]
    pub const fn col(self) -> Col {
        // SAFETY: self.0 % 8 is always in 0-7
        match Col::from_index(self.0 % 8) {
            Some(c) => c,
            None => unreachable!(),
        }
    }

    /// Returns the square one compass step away, or `None` off the board.
    ///
    /// `dr` and `dc` are row and column deltas. Line walks in move
    /// generation and flipping both step through this, so bounds handling
    /// is identical on the two paths.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = (self.0 / 8) as i8 + dr;
        let col = (self.0 % 8) as i8 + dc;
        if row >= 0 && row < 8 && col >= 0 && col < 8 {
            Some(Square((row * 8 + col) as u8))
        } else {
            None
        }
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.col(), self.row())
    }

    // Corner squares
    pub const A1: Square = Square(0);
    pub const H1: Square = Square(7);
    pub const A8: Square = Square(56);
    pub const H8: Square = Square(63);

    // The four center squares holding the starting discs
    pub const D4: Square = Square(27);
    pub const E4: Square = Square(28);
    pub const D5: Square = Square(35);
    pub const E5: Square = Square(36);
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
