pub mod board;
pub mod engine;

pub use board::search::{choose_move, SearchRequest, Strategy};
pub use board::{Board, Color, Move, MoveList, Piece, Square};
pub use engine::EngineController;
