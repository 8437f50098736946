//! Error types for the simulation core

use thiserror::Error;

/// Errors raised by the cell containers, the board codec and the universe.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    /// A character that is neither `*` nor `.`
    #[error("unrecognized cell character {character:?}")]
    UnrecognizedCharacter { character: char },

    /// An unrecognized character found while decoding a board
    #[error("unrecognized cell character {character:?} at row {row}, column {column}")]
    Decode {
        character: char,
        row: usize,
        column: usize,
    },

    #[error("all rows must have the same column count: row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Coarse classification of a [`LifeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Decode,
    Shape,
    IndexOutOfRange,
}

impl LifeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LifeError::UnrecognizedCharacter { .. } | LifeError::Decode { .. } => ErrorKind::Decode,
            LifeError::RaggedRows { .. } => ErrorKind::Shape,
            LifeError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
        }
    }
}

pub type Result<T> = std::result::Result<T, LifeError>;
