//! Heuristic position evaluation over bitboard occupancy.

use super::types::{Bitboard, Color, Square};
use super::Board;

/// A king counts this much more than a man
const KING_WEIGHT: f64 = 1.5;
/// Mobility is a tie-breaker only, well below one man
const MOBILITY_WEIGHT: f64 = 0.1;

/// Occupancy sets for one position.
pub(crate) struct BoardBits {
    pub(crate) red: Bitboard,
    pub(crate) black: Bitboard,
    pub(crate) kings: Bitboard,
}

impl BoardBits {
    pub(crate) fn from_board(board: &Board) -> Self {
        let mut red = Bitboard::EMPTY;
        let mut black = Bitboard::EMPTY;
        let mut kings = Bitboard::EMPTY;
        for row in 0..8 {
            for col in 0..8 {
                let sq = Square(row, col);
                let Some(piece) = board.piece_at(sq) else {
                    continue;
                };
                let bit = Bitboard::from_square(sq);
                match piece.color {
                    Color::Red => red |= bit,
                    Color::Black => black |= bit,
                }
                if piece.king {
                    kings |= bit;
                }
            }
        }
        BoardBits { red, black, kings }
    }
}

impl Board {
    /// Heuristic score of this position. Positive favors Red.
    ///
    /// Material difference counts 1 per man, kings carry a 1.5 weight, and
    /// the difference in available moves (under forced capture) breaks
    /// ties at a tenth of a man.
    #[must_use]
    pub fn evaluate(&self) -> f64 {
        let bits = BoardBits::from_board(self);

        let red_kings = (bits.red & bits.kings).popcount();
        let black_kings = (bits.black & bits.kings).popcount();
        let red_men = bits.red.popcount() - red_kings;
        let black_men = bits.black.popcount() - black_kings;

        let red_mobility = self.legal_moves(Color::Red, true).len();
        let black_mobility = self.legal_moves(Color::Black, true).len();

        f64::from(red_men) - f64::from(black_men)
            + KING_WEIGHT * (f64::from(red_kings) - f64::from(black_kings))
            + MOBILITY_WEIGHT * (red_mobility as f64 - black_mobility as f64)
    }
}
