//! Flat Monte-Carlo move ranking.
//!
//! No tree policy: playouts are dealt to the candidate moves round-robin,
//! so every candidate gets a near-equal share of trials, and each playout
//! is a uniformly random game continued until one side cannot move.

use rand::Rng;

use crate::board::types::{Color, Move, MoveList};
use crate::board::Board;

/// A random playout running longer than this is scored as no win for
/// either side. Random king endgames can shuffle forever otherwise.
const MAX_PLAYOUT_PLIES: usize = 200;

/// Per-candidate playout bookkeeping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct CandidateScore {
    pub(crate) playouts: u32,
    pub(crate) wins: u32,
}

/// Rank the legal moves of `color` by random-playout win rate and return
/// the best, or `None` if there are no legal moves.
///
/// Ties keep the earliest candidate in enumeration order, matching the
/// alpha-beta tie-break.
pub fn monte_carlo<R: Rng>(
    board: &Board,
    color: Color,
    playouts: u32,
    enforce_capture: bool,
    rng: &mut R,
) -> Option<Move> {
    let candidates = board.legal_moves(color, enforce_capture);
    if candidates.is_empty() {
        return None;
    }

    let tally = run_playouts(board, color, &candidates, playouts, enforce_capture, rng);
    let mut best = 0;
    for (idx, score) in tally.iter().enumerate() {
        if score.wins > tally[best].wins {
            best = idx;
        }
    }
    candidates.as_slice().get(best).copied()
}

/// Deal `playouts` trials to the candidates round-robin (playout `i` goes
/// to candidate `i % n`) and count wins for `color`.
pub(crate) fn run_playouts<R: Rng>(
    board: &Board,
    color: Color,
    candidates: &MoveList,
    playouts: u32,
    enforce_capture: bool,
    rng: &mut R,
) -> Vec<CandidateScore> {
    let mut tally = vec![CandidateScore::default(); candidates.len()];
    for i in 0..playouts as usize {
        let idx = i % candidates.len();
        let (start, _) = board.apply_move(&candidates.as_slice()[idx]);
        tally[idx].playouts += 1;
        if playout_winner(start, color.opponent(), enforce_capture, rng) == Some(color) {
            tally[idx].wins += 1;
        }
    }
    tally
}

/// Play random moves until a side is stuck (it loses) or the ply cap is
/// reached (`None`, nobody wins).
fn playout_winner<R: Rng>(
    mut board: Board,
    mut to_move: Color,
    enforce_capture: bool,
    rng: &mut R,
) -> Option<Color> {
    for _ in 0..MAX_PLAYOUT_PLIES {
        let moves = board.legal_moves(to_move, enforce_capture);
        if moves.is_empty() {
            return Some(to_move.opponent());
        }
        let pick = moves.as_slice()[rng.gen_range(0..moves.len())];
        board = board.apply_move(&pick).0;
        to_move = to_move.opponent();
    }
    None
}
