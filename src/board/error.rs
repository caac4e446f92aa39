//! Error types for board and engine operations.

use std::fmt;

/// Error type for square construction and notation parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid board notation (expected e.g. "d6")
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for board diagram parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagramError {
    /// Diagram must have exactly 8 ranks
    WrongRankCount { found: usize },
    /// A rank must have exactly 8 characters
    WrongRankWidth { rank: usize, width: usize },
    /// Invalid piece character (expected . r R b B)
    InvalidPiece { char: char },
}

impl fmt::Display for DiagramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagramError::WrongRankCount { found } => {
                write!(f, "Diagram must have 8 ranks, found {found}")
            }
            DiagramError::WrongRankWidth { rank, width } => {
                write!(f, "Rank {rank} must have 8 squares, found {width}")
            }
            DiagramError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in diagram")
            }
        }
    }
}

impl std::error::Error for DiagramError {}

/// Error type for malformed search requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Unrecognized strategy name. Guessing the algorithm would silently
    /// change search semantics, so this is rejected rather than defaulted.
    UnknownStrategy { found: String },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::UnknownStrategy { found } => {
                write!(
                    f,
                    "Unknown strategy '{found}', expected 'alphabeta' or 'mcts'"
                )
            }
        }
    }
}

impl std::error::Error for EngineError {}
