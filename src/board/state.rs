//! Board state: the 8x8 grid, move application, and diagram text I/O.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::DiagramError;
use super::types::{Color, Move, Piece, Square};

/// An 8x8 checkers board.
///
/// Each square holds at most one piece. The engine operates on whatever
/// board it is given; it does not require pieces to sit on dark squares.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

/// What happened when a move was applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// A piece was removed from the board
    pub capture: bool,
    /// The moved piece was freshly crowned
    pub crowned: bool,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard starting position: Black men on the dark squares of
    /// rows 0-2, Red men on the dark squares of rows 5-7.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self::empty();
        for row in 0..3 {
            for col in 0..8 {
                if Square(row, col).is_dark() {
                    board.squares[row][col] = Some(Piece::man(Color::Black));
                }
            }
        }
        for row in 5..8 {
            for col in 0..8 {
                if Square(row, col).is_dark() {
                    board.squares[row][col] = Some(Piece::man(Color::Red));
                }
            }
        }
        board
    }

    /// A board with no pieces
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The piece on `sq`, if any
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.0][sq.1]
    }

    /// Place or clear a square
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.0][sq.1] = piece;
    }

    /// Count the pieces of one color
    #[must_use]
    pub fn piece_count(&self, color: Color) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|p| p.map(|p| p.color) == Some(color))
            .count()
    }

    /// Apply a move, returning the resulting board.
    ///
    /// The moved piece leaves `from`, lands on `to`, any `captured` piece
    /// is removed, and a man reaching its crown row is promoted. The input
    /// board is never mutated; every search branch works on its own copy.
    #[must_use]
    pub fn apply_move(&self, mv: &Move) -> (Board, MoveOutcome) {
        let mut next = self.clone();
        let piece = next.squares[mv.from.0][mv.from.1].take();
        debug_assert!(piece.is_some(), "apply_move from an empty square");
        let Some(mut piece) = piece else {
            return (next, MoveOutcome::default());
        };

        let mut capture = false;
        if let Some(cap) = mv.captured {
            let taken = next.squares[cap.0][cap.1].take();
            debug_assert!(
                taken.is_some_and(|p| p.color != piece.color),
                "captured square must hold an opponent piece"
            );
            capture = taken.is_some();
        }

        let mut crowned = false;
        if !piece.king && mv.to.0 == piece.color.crown_row() {
            piece.king = true;
            crowned = true;
        }
        next.squares[mv.to.0][mv.to.1] = Some(piece);
        (next, MoveOutcome { capture, crowned })
    }

    /// Mirror image of this board: rows flipped and colors swapped.
    ///
    /// The mirror of a position is strategically identical with the sides
    /// exchanged, which makes this useful for symmetry diagnostics.
    #[must_use]
    pub fn mirrored(&self) -> Board {
        let mut out = Self::empty();
        for row in 0..8 {
            for col in 0..8 {
                out.squares[7 - row][col] = self.squares[row][col].map(|p| Piece {
                    color: p.color.opponent(),
                    king: p.king,
                });
            }
        }
        out
    }

    /// Parse a board from an 8-line text diagram.
    ///
    /// Row 0 comes first. `.` is an empty square, `r`/`R` a red man/king,
    /// `b`/`B` a black man/king. Blank lines and surrounding whitespace
    /// are ignored, so diagrams can be written inline in tests:
    ///
    /// ```
    /// use checkers_engine::board::Board;
    ///
    /// let board = Board::from_diagram(
    ///     "........
    ///      ........
    ///      ...r....
    ///      ....b...
    ///      ........
    ///      ........
    ///      ........
    ///      ........",
    /// )
    /// .unwrap();
    /// assert_eq!(board.to_string().lines().count(), 8);
    /// ```
    pub fn from_diagram(diagram: &str) -> Result<Board, DiagramError> {
        let ranks: Vec<&str> = diagram
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if ranks.len() != 8 {
            return Err(DiagramError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Self::empty();
        for (row, rank) in ranks.iter().enumerate() {
            let width = rank.chars().count();
            if width != 8 {
                return Err(DiagramError::WrongRankWidth { rank: row, width });
            }
            for (col, c) in rank.chars().enumerate() {
                if c == '.' {
                    continue;
                }
                match Piece::from_char(c) {
                    Some(piece) => board.squares[row][col] = Some(piece),
                    None => return Err(DiagramError::InvalidPiece { char: c }),
                }
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.squares {
            for square in row {
                match square {
                    Some(piece) => write!(f, "{}", piece.to_char())?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_diagram(s)
    }
}
