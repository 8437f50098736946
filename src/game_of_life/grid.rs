//! Two-dimensional cell storage for Game of Life boards

use super::{Cell, CellRow};
use crate::error::{LifeError, Result};

/// A `rows x columns` grid of cells backed by a single row-major buffer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid where every cell is dead
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![Cell::Dead; rows * columns],
        }
    }

    /// Build a grid from rows, which must all have the length of the first
    pub fn from_rows(rows: Vec<CellRow>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, CellRow::len);

        if let Some((row, found)) = rows
            .iter()
            .map(CellRow::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(LifeError::RaggedRows {
                row,
                expected: width,
                found,
            });
        }

        Ok(Self {
            rows: height,
            columns: width,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Build a grid by evaluating `f(row, column)` in row-major order
    pub fn from_fn<F>(rows: usize, columns: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Cell,
    {
        let mut cells = Vec::with_capacity(rows * columns);
        for row in 0..rows {
            for col in 0..columns {
                cells.push(f(row, col));
            }
        }
        Self { rows, columns, cells }
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Convert 2D coordinates to a buffer index, checking both axes
    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows {
            return Err(LifeError::IndexOutOfRange {
                index: row,
                len: self.rows,
            });
        }
        if col >= self.columns {
            return Err(LifeError::IndexOutOfRange {
                index: col,
                len: self.columns,
            });
        }
        Ok(row * self.columns + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        let idx = self.index(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Copy of a single row
    pub fn row(&self, row: usize) -> Result<CellRow> {
        if row >= self.rows {
            return Err(LifeError::IndexOutOfRange {
                index: row,
                len: self.rows,
            });
        }
        Ok(CellRow::from(self.row_slice(row)))
    }

    fn row_slice(&self, row: usize) -> &[Cell] {
        let start = row * self.columns;
        &self.cells[start..start + self.columns]
    }

    /// Rows in top-to-bottom order
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..self.rows).map(move |row| self.row_slice(row))
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_live()).count()
    }

    /// Coordinates of every live cell in row-major order
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_live())
            .map(|(idx, _)| (idx / self.columns, idx % self.columns))
            .collect()
    }
}
