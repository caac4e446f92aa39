//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Checkers colors. Red moves toward row 0, Black toward row 7.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Both colors in index order (Red=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::Red, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Scoring sign for evaluation (+1 for Red, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Color::Red => 1,
            Color::Black => -1,
        }
    }

    /// Row a man of this color is crowned on (0 for Red, 7 for Black)
    #[inline]
    #[must_use]
    pub const fn crown_row(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Black => 7,
        }
    }

    /// Forward row delta for men of this color (-1 for Red, +1 for Black)
    #[inline]
    #[must_use]
    pub const fn forward(self) -> isize {
        match self {
            Color::Red => -1,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// A checkers piece: a color plus the crowned flag.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub color: Color,
    #[cfg_attr(feature = "serde", serde(default))]
    pub king: bool,
}

impl Piece {
    /// An uncrowned piece of the given color
    #[inline]
    #[must_use]
    pub const fn man(color: Color) -> Self {
        Piece { color, king: false }
    }

    /// A crowned piece of the given color
    #[inline]
    #[must_use]
    pub const fn king(color: Color) -> Self {
        Piece { color, king: true }
    }

    /// Parse a piece from a diagram character (r/R red, b/B black;
    /// uppercase is a king)
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c {
            'r' => Some(Piece::man(Color::Red)),
            'R' => Some(Piece::king(Color::Red)),
            'b' => Some(Piece::man(Color::Black)),
            'B' => Some(Piece::king(Color::Black)),
            _ => None,
        }
    }

    /// Convert the piece to its diagram character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match (self.color, self.king) {
            (Color::Red, false) => 'r',
            (Color::Red, true) => 'R',
            (Color::Black, false) => 'b',
            (Color::Black, true) => 'B',
        }
    }
}
