//! Checkers board representation and game logic.
//!
//! The board is an 8x8 grid of optional pieces. Move generation enforces
//! the forced-capture rule, and evaluation uses bitboard occupancy counts.
//!
//! # Example
//! ```
//! use checkers_engine::board::{Board, Color};
//!
//! let board = Board::new();
//! let moves = board.legal_moves(Color::Red, true);
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod error;
mod eval;
mod movegen;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{DiagramError, EngineError, SquareError};
pub use state::{Board, MoveOutcome};
pub use types::{Bitboard, Color, Move, MoveList, Piece, Square};

// Public API - search entry points
pub use search::{alpha_beta, choose_move, monte_carlo, SearchOutcome, SearchRequest, Strategy};
