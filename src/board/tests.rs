//! Property-based tests over randomly generated positions.

use proptest::prelude::*;

use super::{Board, Color, Piece, Square};

/// Map an index in 0..32 to a dark square (standard playable squares)
fn dark_square(idx: usize) -> Square {
    let row = idx / 4;
    let col = 2 * (idx % 4) + (row + 1) % 2;
    Square(row, col)
}

/// Strategy producing sparse boards with pieces on dark squares
fn board_strategy() -> impl Strategy<Value = Board> {
    prop::collection::vec((0..32usize, any::<bool>(), any::<bool>()), 0..16).prop_map(
        |placements| {
            let mut board = Board::empty();
            for (idx, black, king) in placements {
                let color = if black { Color::Black } else { Color::Red };
                board.set(dark_square(idx), Some(Piece { color, king }));
            }
            board
        },
    )
}

proptest! {
    /// When any capture exists for a side, forced-capture move lists
    /// contain captures only, and are never emptied by the filter.
    #[test]
    fn prop_forced_capture_filters_to_captures(board in board_strategy()) {
        for color in Color::BOTH {
            let relaxed = board.legal_moves(color, false);
            let forced = board.legal_moves(color, true);
            if relaxed.iter().any(|m| m.is_capture()) {
                prop_assert!(!forced.is_empty());
                prop_assert!(forced.iter().all(|m| m.is_capture()));
            } else {
                prop_assert_eq!(forced.len(), relaxed.len());
            }
        }
    }

    /// A mirrored board (rows flipped, colors swapped) gives the
    /// mirrored side exactly as many legal moves.
    #[test]
    fn prop_mirror_move_counts_match(board in board_strategy()) {
        let mirror = board.mirrored();
        for color in Color::BOTH {
            prop_assert_eq!(
                board.legal_moves(color, true).len(),
                mirror.legal_moves(color.opponent(), true).len()
            );
        }
    }

    /// Mirroring negates the evaluation.
    #[test]
    fn prop_mirror_negates_evaluation(board in board_strategy()) {
        prop_assert_eq!(board.mirrored().evaluate(), -board.evaluate());
    }

    /// Applying any legal move keeps kings crowned and crowns exactly
    /// the men that reach their back rank.
    #[test]
    fn prop_promotion_is_monotone(board in board_strategy()) {
        for color in Color::BOTH {
            for mv in &board.legal_moves(color, true) {
                let piece = board.piece_at(mv.from).unwrap();
                let (next, outcome) = board.apply_move(mv);
                let landed = next.piece_at(mv.to).unwrap();
                prop_assert_eq!(landed.color, piece.color);
                if piece.king {
                    prop_assert!(landed.king);
                    prop_assert!(!outcome.crowned);
                } else {
                    let crowned = mv.to.row() == color.crown_row();
                    prop_assert_eq!(landed.king, crowned);
                    prop_assert_eq!(outcome.crowned, crowned);
                }
            }
        }
    }

    /// Every generated move stays on the board and starts from a piece
    /// of the side to move.
    #[test]
    fn prop_moves_are_well_formed(board in board_strategy()) {
        for color in Color::BOTH {
            for mv in &board.legal_moves(color, false) {
                prop_assert!(mv.from.row() < 8 && mv.from.col() < 8);
                prop_assert!(mv.to.row() < 8 && mv.to.col() < 8);
                prop_assert_eq!(board.piece_at(mv.from).map(|p| p.color), Some(color));
                prop_assert!(board.piece_at(mv.to).is_none());
                if let Some(cap) = mv.captured {
                    prop_assert_eq!(
                        board.piece_at(cap).map(|p| p.color),
                        Some(color.opponent())
                    );
                }
            }
        }
    }
}
