//! Cell state and its one-character glyph

use crate::error::{LifeError, Result};
use std::fmt;

pub const LIVE_GLYPH: char = '*';
pub const DEAD_GLYPH: char = '.';

/// State of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    Live,
    #[default]
    Dead,
}

impl Cell {
    /// Decode a glyph, failing on anything but `*` and `.`
    pub fn from_char(ch: char) -> Result<Self> {
        match ch {
            LIVE_GLYPH => Ok(Cell::Live),
            DEAD_GLYPH => Ok(Cell::Dead),
            character => Err(LifeError::UnrecognizedCharacter { character }),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Live => LIVE_GLYPH,
            Cell::Dead => DEAD_GLYPH,
        }
    }

    pub fn is_live(self) -> bool {
        self == Cell::Live
    }

    pub fn toggled(self) -> Self {
        match self {
            Cell::Live => Cell::Dead,
            Cell::Dead => Cell::Live,
        }
    }
}

impl TryFrom<char> for Cell {
    type Error = LifeError;

    fn try_from(ch: char) -> Result<Self> {
        Cell::from_char(ch)
    }
}

impl From<Cell> for char {
    fn from(cell: Cell) -> char {
        cell.to_char()
    }
}

impl From<bool> for Cell {
    fn from(live: bool) -> Self {
        if live {
            Cell::Live
        } else {
            Cell::Dead
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
