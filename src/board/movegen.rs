//! Legal move generation with the forced-capture rule.

use super::types::{Color, Move, MoveList, Square};
use super::Board;

const FORWARD_RED: [(isize, isize); 2] = [(-1, -1), (-1, 1)];
const FORWARD_BLACK: [(isize, isize); 2] = [(1, -1), (1, 1)];
const ALL_DIAGONALS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl Board {
    /// Steps and jumps for the piece on `sq`.
    ///
    /// Men move only forward for their color; kings in all four diagonals.
    /// For each direction: an empty adjacent square is a step, an adjacent
    /// opponent with an empty landing square beyond it is a jump. When
    /// `prefer_captures` is set and the piece has at least one jump, its
    /// simple steps are suppressed.
    ///
    /// Returns an empty list for an empty square.
    #[must_use]
    pub fn piece_moves(&self, sq: Square, prefer_captures: bool) -> MoveList {
        let mut moves = MoveList::new();
        let Some(piece) = self.piece_at(sq) else {
            return moves;
        };

        let directions: &[(isize, isize)] = if piece.king {
            &ALL_DIAGONALS
        } else if piece.color == Color::Red {
            &FORWARD_RED
        } else {
            &FORWARD_BLACK
        };

        for &(dr, dc) in directions {
            let Some(adjacent) = sq.offset(dr, dc) else {
                continue;
            };
            match self.piece_at(adjacent) {
                None => moves.push(Move::step(sq, adjacent)),
                Some(other) if other.color != piece.color => {
                    if let Some(landing) = adjacent.offset(dr, dc) {
                        if self.piece_at(landing).is_none() {
                            moves.push(Move::jump(sq, landing, adjacent));
                        }
                    }
                }
                Some(_) => {}
            }
        }

        if prefer_captures && moves.iter().any(|m| m.is_capture()) {
            return moves.filtered(|m| m.is_capture());
        }
        moves
    }

    /// Every legal move for `color`, in row-major board order.
    ///
    /// With `enforce_capture`, a capture anywhere on the board for this
    /// side makes all of its non-capturing moves illegal. The filter is
    /// global: a piece with only quiet moves loses them when another piece
    /// of the same color can jump.
    ///
    /// An empty list means `color` has lost (or is stalled).
    #[must_use]
    pub fn legal_moves(&self, color: Color, enforce_capture: bool) -> MoveList {
        let mut moves = MoveList::new();
        for row in 0..8 {
            for col in 0..8 {
                let sq = Square(row, col);
                if self.piece_at(sq).map(|p| p.color) != Some(color) {
                    continue;
                }
                for mv in &self.piece_moves(sq, enforce_capture) {
                    moves.push(*mv);
                }
            }
        }

        if enforce_capture && moves.iter().any(|m| m.is_capture()) {
            return moves.filtered(|m| m.is_capture());
        }
        moves
    }

    /// True if `color` has at least one legal move
    #[must_use]
    pub fn has_moves(&self, color: Color, enforce_capture: bool) -> bool {
        !self.legal_moves(color, enforce_capture).is_empty()
    }
}
