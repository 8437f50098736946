//! Fixed-length row of cells

use super::Cell;
use crate::error::{LifeError, Result};

/// A row whose length is fixed at construction
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellRow {
    cells: Vec<Cell>,
}

impl CellRow {
    /// Create a row of `count` dead cells
    pub fn new(count: usize) -> Self {
        Self {
            cells: vec![Cell::Dead; count],
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<Cell> {
        self.cells
            .get(index)
            .copied()
            .ok_or(LifeError::IndexOutOfRange {
                index,
                len: self.cells.len(),
            })
    }

    pub fn set(&mut self, index: usize, cell: Cell) -> Result<()> {
        let len = self.cells.len();
        let slot = self
            .cells
            .get_mut(index)
            .ok_or(LifeError::IndexOutOfRange { index, len })?;
        *slot = cell;
        Ok(())
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Cell>> {
        self.cells.iter().copied()
    }

    pub fn as_slice(&self) -> &[Cell] {
        &self.cells
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_live()).count()
    }

    /// Decode a single line of glyphs
    pub fn parse(line: &str) -> Result<Self> {
        line.chars()
            .map(Cell::from_char)
            .collect::<Result<Vec<_>>>()
            .map(Self::from)
    }
}

impl From<Vec<Cell>> for CellRow {
    fn from(cells: Vec<Cell>) -> Self {
        Self { cells }
    }
}

impl From<&[Cell]> for CellRow {
    fn from(cells: &[Cell]) -> Self {
        Self {
            cells: cells.to_vec(),
        }
    }
}

impl FromIterator<Cell> for CellRow {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CellRow {
    type Item = Cell;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Cell>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for CellRow {
    type Item = Cell;
    type IntoIter = std::vec::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}
