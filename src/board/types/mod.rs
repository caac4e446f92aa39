mod bitboard;
mod moves;
mod piece;
mod square;

pub use bitboard::Bitboard;
pub use moves::{Move, MoveList};
pub use piece::{Color, Piece};
pub use square::Square;
