//! A single generation of cells plus its text encoding

use super::{Cell, CellRow, Grid};
use crate::error::{LifeError, Result};
use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

/// Separator between rows in the text format
pub const LINE_SEPARATOR: char = '\n';

pub const DEFAULT_ROW_COUNT: usize = 3;
pub const DEFAULT_COLUMN_COUNT: usize = 3;

/// One generation's grid
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    grid: Grid,
}

impl Board {
    /// Create a board where every cell is dead
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            grid: Grid::new(rows, columns),
        }
    }

    pub fn from_grid(grid: Grid) -> Self {
        Self { grid }
    }

    /// Decode a board from rows of `*`/`.` glyphs separated by [`LINE_SEPARATOR`].
    ///
    /// An empty string yields a 0x0 board, not a single row of zero columns, so
    /// `""` never produces a 1x0 board. Any other input yields one row per
    /// separated line, so `"\n"` is two rows of zero columns.
    pub fn load_from_text(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Ok(Self::new(0, 0));
        }

        let rows = text
            .split(LINE_SEPARATOR)
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(column, ch)| {
                        Cell::from_char(ch).map_err(|_| LifeError::Decode {
                            character: ch,
                            row,
                            column,
                        })
                    })
                    .collect::<Result<CellRow>>()
            })
            .collect::<Result<Vec<_>>>()?;

        let board = Self::load_from_rows(rows)?;
        tracing::trace!(rows = board.height(), columns = board.width(), "decoded board");
        Ok(board)
    }

    /// Build a board from already-decoded rows
    pub fn load_from_rows(rows: Vec<CellRow>) -> Result<Self> {
        Grid::from_rows(rows).map(Self::from_grid)
    }

    /// Encode as text; rows are joined by [`LINE_SEPARATOR`] with no trailing separator
    pub fn to_text(&self) -> String {
        self.grid
            .rows()
            .map(|row| row.iter().map(|cell| cell.to_char()).collect::<String>())
            .join(&LINE_SEPARATOR.to_string())
    }

    /// Cell at row `x`, column `y`
    pub fn get(&self, x: usize, y: usize) -> Result<Cell> {
        self.grid.get(x, y)
    }

    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<()> {
        self.grid.set(x, y, cell)
    }

    pub fn width(&self) -> usize {
        self.grid.column_count()
    }

    pub fn height(&self) -> usize {
        self.grid.row_count()
    }

    /// Independent copy of the underlying grid
    pub fn contents(&self) -> Grid {
        self.grid.clone()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Count live cells among the eight neighbours of `(x, y)`.
    ///
    /// Neighbours outside the board count as dead; there is no wraparound.
    pub fn live_neighbours_at(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;

        for dx in [-1isize, 0, 1] {
            for dy in [-1isize, 0, 1] {
                if dx == 0 && dy == 0 {
                    continue; // Skip the cell itself
                }
                let neighbour = x.checked_add_signed(dx).zip(y.checked_add_signed(dy));
                if neighbour.map_or(false, |(nx, ny)| self.is_live_neighbour(nx, ny)) {
                    count += 1;
                }
            }
        }

        count
    }

    fn is_live_neighbour(&self, x: usize, y: usize) -> bool {
        // Out of range lookups are dead cells
        self.grid.get(x, y).map_or(false, Cell::is_live)
    }

    pub fn living_count(&self) -> usize {
        self.grid.live_count()
    }

    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        self.grid.live_cells()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_ROW_COUNT, DEFAULT_COLUMN_COUNT)
    }
}

impl FromStr for Board {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::load_from_text(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
