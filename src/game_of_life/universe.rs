//! An evolving sequence of boards

use super::{Board, Cell, GameOfLifeRules, Grid};
use crate::error::Result;
use rayon::prelude::*;
use std::fmt;

/// Holds the board for the current generation and replaces it on every tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Universe {
    board: Board,
    generation: u64,
}

impl Universe {
    /// Create a universe of dead cells
    pub fn new(rows: usize, columns: usize) -> Self {
        Self::from_board(Board::new(rows, columns))
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            generation: 0,
        }
    }

    /// Create a universe whose first generation is decoded from `text`
    pub fn load_from(text: &str) -> Result<Self> {
        Board::load_from_text(text).map(Self::from_board)
    }

    /// Advance by one generation.
    ///
    /// The next board is computed in full from the current one and then swapped in.
    pub fn create_next_generation(&mut self) {
        self.board = GameOfLifeRules::evolve(&self.board);
        self.generation += 1;
        tracing::debug!(
            generation = self.generation,
            living = self.board.living_count(),
            "created next generation"
        );
    }

    /// Advance by `generations` ticks
    pub fn advance(&mut self, generations: usize) {
        for _ in 0..generations {
            self.create_next_generation();
        }
    }

    pub fn set_live_cell_at(&mut self, row: usize, column: usize) -> Result<()> {
        self.board.set(row, column, Cell::Live)
    }

    pub fn set_dead_cell_at(&mut self, row: usize, column: usize) -> Result<()> {
        self.board.set(row, column, Cell::Dead)
    }

    pub fn cell_at(&self, row: usize, column: usize) -> Result<Cell> {
        self.board.get(row, column)
    }

    /// Current board encoded as text
    pub fn grid(&self) -> String {
        self.board.to_text()
    }

    /// Independent copy of the current grid
    pub fn cells(&self) -> Grid {
        self.board.contents()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of ticks since this universe was created
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.board, f)
    }
}

/// Advance independent universes in parallel; they share no state
pub fn advance_independent(universes: &mut [Universe], generations: usize) {
    universes
        .par_iter_mut()
        .for_each(|universe| universe.advance(generations));
}
