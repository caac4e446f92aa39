//! Fail-hard minimax with alpha-beta pruning. Red maximizes.

use crate::board::types::{Color, Move};
use crate::board::Board;

/// Score and best move for one node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchOutcome {
    /// Final bound at this node: `alpha` for Red, `beta` for Black
    pub score: f64,
    /// Best move found, `None` at leaf and lost nodes
    pub best: Option<Move>,
}

/// Recursive alpha-beta search to `depth` plies.
///
/// A node where the side to move has no legal moves scores as a loss for
/// that side: `-inf` when Red is stuck, `+inf` when Black is. At depth
/// zero the static evaluation decides. The first strictly better child
/// becomes the best move; equal scores never replace it, so identical
/// inputs always produce identical results.
#[must_use]
pub fn alpha_beta(
    board: &Board,
    depth: u32,
    to_move: Color,
    mut alpha: f64,
    mut beta: f64,
    enforce_capture: bool,
) -> SearchOutcome {
    if depth == 0 {
        return SearchOutcome {
            score: board.evaluate(),
            best: None,
        };
    }

    let moves = board.legal_moves(to_move, enforce_capture);
    if moves.is_empty() {
        let score = match to_move {
            Color::Red => f64::NEG_INFINITY,
            Color::Black => f64::INFINITY,
        };
        return SearchOutcome { score, best: None };
    }

    let mut best = None;
    match to_move {
        Color::Red => {
            for mv in &moves {
                let (child, _) = board.apply_move(mv);
                let score =
                    alpha_beta(&child, depth - 1, Color::Black, alpha, beta, enforce_capture).score;
                if score > alpha {
                    alpha = score;
                    best = Some(*mv);
                }
                if alpha >= beta {
                    break;
                }
            }
            SearchOutcome { score: alpha, best }
        }
        Color::Black => {
            for mv in &moves {
                let (child, _) = board.apply_move(mv);
                let score =
                    alpha_beta(&child, depth - 1, Color::Red, alpha, beta, enforce_capture).score;
                if score < beta {
                    beta = score;
                    best = Some(*mv);
                }
                if alpha >= beta {
                    break;
                }
            }
            SearchOutcome { score: beta, best }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::types::Square;

    fn search(board: &Board, depth: u32, to_move: Color) -> SearchOutcome {
        alpha_beta(
            board,
            depth,
            to_move,
            f64::NEG_INFINITY,
            f64::INFINITY,
            true,
        )
    }

    #[test]
    fn test_depth_zero_returns_static_eval() {
        let board = Board::new();
        let outcome = search(&board, 0, Color::Red);
        assert_eq!(outcome.score, board.evaluate());
        assert_eq!(outcome.best, None);
    }

    #[test]
    fn test_stuck_red_scores_negative_infinity() {
        let board = Board::from_diagram(
            "........
             ........
             ........
             ........
             ........
             ........
             ........
             ...b....",
        )
        .unwrap();
        let outcome = search(&board, 3, Color::Red);
        assert_eq!(outcome.score, f64::NEG_INFINITY);
        assert_eq!(outcome.best, None);
    }

    #[test]
    fn test_stuck_black_scores_positive_infinity() {
        let board = Board::from_diagram(
            "........
             ........
             ........
             ....r...
             ........
             ........
             ........
             ........",
        )
        .unwrap();
        let outcome = search(&board, 3, Color::Black);
        assert_eq!(outcome.score, f64::INFINITY);
        assert_eq!(outcome.best, None);
    }

    #[test]
    fn test_finds_winning_capture() {
        // Red king can take Black's last piece
        let board = Board::from_diagram(
            "........
             ........
             ...R....
             ....b...
             ........
             ........
             ........
             ........",
        )
        .unwrap();
        let outcome = search(&board, 3, Color::Red);
        assert_eq!(
            outcome.best,
            Some(Move::jump(Square(2, 3), Square(4, 5), Square(3, 4)))
        );
        assert_eq!(outcome.score, f64::INFINITY);
    }

    #[test]
    fn test_black_minimizes() {
        // Black king can take Red's last piece
        let board = Board::from_diagram(
            "........
             ........
             ...B....
             ....r...
             ........
             ........
             ........
             ........",
        )
        .unwrap();
        let outcome = search(&board, 3, Color::Black);
        assert_eq!(
            outcome.best,
            Some(Move::jump(Square(2, 3), Square(4, 5), Square(3, 4)))
        );
        assert_eq!(outcome.score, f64::NEG_INFINITY);
    }

    #[test]
    fn test_avoids_losing_exchange() {
        // Red to move: stepping to (4,3) lets the black man jump it.
        // Depth 2 sees the reply and keeps the other step.
        let board = Board::from_diagram(
            "........
             ........
             ........
             ....b...
             ........
             ....r...
             ........
             .......r",
        )
        .unwrap();
        let outcome = search(&board, 2, Color::Red);
        // both steps of the (5,4) man walk into the jump; only the far
        // man's quiet step keeps the material
        assert_eq!(
            outcome.best,
            Some(Move::step(Square(7, 7), Square(6, 6)))
        );
    }

    #[test]
    fn test_search_is_deterministic() {
        let board = Board::new();
        let first = search(&board, 4, Color::Red);
        for _ in 0..3 {
            assert_eq!(search(&board, 4, Color::Red), first);
        }
    }
}
