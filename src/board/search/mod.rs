//! Move selection: alpha-beta and flat Monte-Carlo search.
//!
//! Both searches are pure functions of the request; no state survives a
//! call (no transposition table, no statistics). The caller picks the
//! algorithm through [`Strategy`] and scales effort with `difficulty`:
//! a recursion depth for alpha-beta, a playout-count multiplier for
//! Monte-Carlo.

mod alpha_beta;
mod monte_carlo;

use std::fmt;
use std::str::FromStr;

use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::types::{Color, Move};
use super::Board;

pub use alpha_beta::{alpha_beta, SearchOutcome};
pub use monte_carlo::monte_carlo;

/// Playouts per difficulty level for Monte-Carlo search
pub const PLAYOUTS_PER_LEVEL: u32 = 200;
/// Floor on the total playout count
pub const MIN_PLAYOUTS: u32 = 10;

/// Which search algorithm answers a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Strategy {
    #[cfg_attr(feature = "serde", serde(rename = "alphabeta"))]
    AlphaBeta,
    #[cfg_attr(feature = "serde", serde(rename = "mcts"))]
    MonteCarlo,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::AlphaBeta => write!(f, "alphabeta"),
            Strategy::MonteCarlo => write!(f, "mcts"),
        }
    }
}

impl FromStr for Strategy {
    type Err = EngineError;

    /// An unrecognized name is an error; defaulting silently would change
    /// search semantics behind the caller's back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alphabeta" => Ok(Strategy::AlphaBeta),
            "mcts" => Ok(Strategy::MonteCarlo),
            other => Err(EngineError::UnknownStrategy {
                found: other.to_string(),
            }),
        }
    }
}

/// One self-contained "compute a move" request.
///
/// The engine sees a single board snapshot; the caller owns game history
/// and multi-jump chaining (a capture that leaves further captures is
/// followed up with another request).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SearchRequest {
    pub board: Board,
    #[cfg_attr(feature = "serde", serde(rename = "color"))]
    pub side_to_move: Color,
    pub difficulty: u32,
    #[cfg_attr(feature = "serde", serde(rename = "algorithm"))]
    pub strategy: Strategy,
    pub enforce_capture: bool,
}

/// Compute the best move for a request, or `None` when the side to move
/// has no legal moves.
///
/// `difficulty` is clamped to a minimum of 1 rather than rejected.
pub fn choose_move<R: Rng>(request: &SearchRequest, rng: &mut R) -> Option<Move> {
    let chosen = match request.strategy {
        Strategy::AlphaBeta => {
            let depth = request.difficulty.max(1);
            let outcome = alpha_beta(
                &request.board,
                depth,
                request.side_to_move,
                f64::NEG_INFINITY,
                f64::INFINITY,
                request.enforce_capture,
            );
            // Every line may be lost (all children score -inf for the
            // mover); still answer with a legal move rather than resign.
            outcome.best.or_else(|| {
                request
                    .board
                    .legal_moves(request.side_to_move, request.enforce_capture)
                    .first()
                    .copied()
            })
        }
        Strategy::MonteCarlo => {
            let playouts = request
                .difficulty
                .saturating_mul(PLAYOUTS_PER_LEVEL)
                .max(MIN_PLAYOUTS);
            monte_carlo(
                &request.board,
                request.side_to_move,
                playouts,
                request.enforce_capture,
                rng,
            )
        }
    };

    #[cfg(feature = "logging")]
    match chosen {
        Some(mv) => log::debug!(
            "{} search for {}: {}",
            request.strategy,
            request.side_to_move,
            mv
        ),
        None => log::debug!(
            "{} search for {}: no legal moves",
            request.strategy,
            request.side_to_move
        ),
    }

    chosen
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_strategy_round_trip() {
        assert_eq!("alphabeta".parse::<Strategy>(), Ok(Strategy::AlphaBeta));
        assert_eq!("mcts".parse::<Strategy>(), Ok(Strategy::MonteCarlo));
        assert_eq!(Strategy::AlphaBeta.to_string(), "alphabeta");
        assert_eq!(Strategy::MonteCarlo.to_string(), "mcts");
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        let err = "negamax".parse::<Strategy>().unwrap_err();
        assert_eq!(
            err,
            EngineError::UnknownStrategy {
                found: "negamax".to_string()
            }
        );
    }

    #[test]
    fn test_zero_difficulty_is_clamped() {
        let request = SearchRequest {
            board: Board::new(),
            side_to_move: Color::Red,
            difficulty: 0,
            strategy: Strategy::AlphaBeta,
            enforce_capture: true,
        };
        let mut rng = StdRng::seed_from_u64(7);
        let mv = choose_move(&request, &mut rng).expect("opening position has moves");
        assert!(Board::new()
            .legal_moves(Color::Red, true)
            .iter()
            .any(|m| *m == mv));
    }

    #[test]
    fn test_no_pieces_means_no_move() {
        for strategy in [Strategy::AlphaBeta, Strategy::MonteCarlo] {
            let request = SearchRequest {
                board: Board::empty(),
                side_to_move: Color::Black,
                difficulty: 3,
                strategy,
                enforce_capture: true,
            };
            let mut rng = StdRng::seed_from_u64(7);
            assert_eq!(choose_move(&request, &mut rng), None);
        }
    }

    #[test]
    fn test_both_strategies_return_legal_moves() {
        let board = Board::new();
        let legal = board.legal_moves(Color::Black, true);
        for strategy in [Strategy::AlphaBeta, Strategy::MonteCarlo] {
            let request = SearchRequest {
                board: board.clone(),
                side_to_move: Color::Black,
                difficulty: 2,
                strategy,
                enforce_capture: true,
            };
            let mut rng = StdRng::seed_from_u64(99);
            let mv = choose_move(&request, &mut rng).expect("should find a move");
            assert!(legal.iter().any(|m| *m == mv), "illegal move {mv}");
        }
    }
}
