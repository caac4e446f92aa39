//! Move type and move list.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// A single step or jump.
///
/// A move with a `captured` square is a jump that removes the piece on that
/// square. Multi-jump sequences are chains of single-capture moves applied
/// one at a time by the caller.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub captured: Option<Square>,
}

impl Move {
    /// A simple diagonal step
    #[inline]
    #[must_use]
    pub const fn step(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            captured: None,
        }
    }

    /// A jump removing the piece on `captured`
    #[inline]
    #[must_use]
    pub const fn jump(from: Square, to: Square, captured: Square) -> Self {
        Move {
            from,
            to,
            captured: Some(captured),
        }
    }

    /// True if this move captures a piece
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}

const EMPTY_MOVE: Move = Move {
    from: Square(0, 0),
    to: Square(0, 0),
    captured: None,
};

/// Upper bound on moves a side can have: 32 occupied squares, four
/// diagonals each.
const MAX_MOVES: usize = 128;

/// Fixed-capacity move list, avoiding a heap allocation per node.
#[derive(Clone, Copy)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    count: usize,
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveList {
    #[must_use]
    pub const fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            count: 0,
        }
    }

    pub fn push(&mut self, mv: Move) {
        debug_assert!(self.count < MAX_MOVES, "move list overflow");
        if self.count < MAX_MOVES {
            self.moves[self.count] = mv;
            self.count += 1;
        }
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.count]
    }

    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&Move> {
        self.as_slice().first()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    /// Copy of this list keeping only moves matching the predicate
    #[must_use]
    pub fn filtered<F: Fn(&Move) -> bool>(&self, keep: F) -> MoveList {
        let mut out = MoveList::new();
        for mv in self.iter().filter(|m| keep(m)) {
            out.push(*mv);
        }
        out
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_len() {
        let mut list = MoveList::new();
        assert!(list.is_empty());
        list.push(Move::step(Square(5, 0), Square(4, 1)));
        list.push(Move::jump(Square(2, 3), Square(4, 5), Square(3, 4)));
        assert_eq!(list.len(), 2);
        assert!(list.as_slice()[1].is_capture());
    }

    #[test]
    fn test_filtered() {
        let mut list = MoveList::new();
        list.push(Move::step(Square(5, 0), Square(4, 1)));
        list.push(Move::jump(Square(2, 3), Square(4, 5), Square(3, 4)));
        let captures = list.filtered(|m| m.is_capture());
        assert_eq!(captures.len(), 1);
        assert_eq!(captures.as_slice()[0].captured, Some(Square(3, 4)));
    }

    #[test]
    fn test_display() {
        let step = Move::step(Square(5, 0), Square(4, 1));
        let jump = Move::jump(Square(2, 3), Square(4, 5), Square(3, 4));
        assert_eq!(step.to_string(), "a3-b4");
        assert_eq!(jump.to_string(), "d6xf4");
    }
}
