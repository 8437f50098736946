//! Conway's transition rule

use super::{Board, Cell, Grid};

/// Neighbour counts at which a dead cell comes alive
pub const BIRTH_NEIGHBOUR_COUNTS: [u8; 1] = [3];
/// Neighbour counts at which a live cell stays alive
pub const SURVIVAL_NEIGHBOUR_COUNTS: [u8; 2] = [2, 3];
/// Maximum possible neighbour count in the Moore neighbourhood
pub const MAX_NEIGHBOUR_COUNT: u8 = 8;

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// State of a cell in the next generation given its current state and neighbour count
    pub fn next_state(current: Cell, neighbours: u8) -> Cell {
        match (current, neighbours) {
            (Cell::Live, 2) | (Cell::Live, 3) | (Cell::Dead, 3) => Cell::Live, // Survive or birth
            _ => Cell::Dead, // Underpopulation, overcrowding or no birth
        }
    }

    /// Compute the next generation from a frozen board.
    ///
    /// Every cell is read from `current` before anything is written, and the
    /// result has the same dimensions as the input.
    pub fn evolve(current: &Board) -> Board {
        let grid = current.grid();
        let rows: Vec<&[Cell]> = grid.rows().collect();
        let next = Grid::from_fn(grid.row_count(), grid.column_count(), |row, col| {
            Self::next_state(rows[row][col], current.live_neighbours_at(row, col))
        });
        Board::from_grid(next)
    }

    /// Evolve the board for multiple generations
    pub fn evolve_generations(mut board: Board, generations: usize) -> Board {
        for _ in 0..generations {
            board = Self::evolve(&board);
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        Board::load_from_text(text).unwrap()
    }

    #[test]
    fn test_rule_table() {
        for neighbours in 0..=MAX_NEIGHBOUR_COUNT {
            let survives = SURVIVAL_NEIGHBOUR_COUNTS.contains(&neighbours);
            let born = BIRTH_NEIGHBOUR_COUNTS.contains(&neighbours);
            assert_eq!(GameOfLifeRules::next_state(Cell::Live, neighbours), Cell::from(survives));
            assert_eq!(GameOfLifeRules::next_state(Cell::Dead, neighbours), Cell::from(born));
        }
    }

    #[test]
    fn test_still_life_block() {
        let grid = board("....\n.**.\n.**.\n....");
        assert_eq!(GameOfLifeRules::evolve(&grid), grid);
    }

    #[test]
    fn test_oscillator_blinker() {
        let horizontal = board("...\n***\n...");
        let vertical = board(".*.\n.*.\n.*.");

        let evolved = GameOfLifeRules::evolve(&horizontal);
        assert_eq!(evolved, vertical);
        assert_eq!(GameOfLifeRules::evolve(&evolved), horizontal);
    }

    #[test]
    fn test_evolution_reads_frozen_snapshot() {
        // An in-place update would see the birth at (0, 1) and keep (1, 0) alive
        let start = board("...\n***\n...");
        let next = GameOfLifeRules::evolve(&start);
        assert_eq!(next.get(0, 1).unwrap(), Cell::Live);
        assert_eq!(next.get(1, 0).unwrap(), Cell::Dead);
    }

    #[test]
    fn test_every_cell_follows_the_rule() {
        let start = board("*.**.\n.*..*\n**.*.\n....*");
        let next = GameOfLifeRules::evolve(&start);
        for row in 0..start.height() {
            for col in 0..start.width() {
                let expected = GameOfLifeRules::next_state(
                    start.get(row, col).unwrap(),
                    start.live_neighbours_at(row, col),
                );
                assert_eq!(next.get(row, col).unwrap(), expected, "at ({}, {})", row, col);
            }
        }
        assert_eq!((next.height(), next.width()), (4, 5));
    }

    #[test]
    fn test_l_tromino_becomes_block() {
        let next = GameOfLifeRules::evolve(&board("**.\n*..\n..."));
        assert_eq!(next.to_text(), "**.\n**.\n...");
    }

    #[test]
    fn test_glider_translates() {
        let glider = board(".*...\n..*..\n***..\n.....\n.....");
        let moved = GameOfLifeRules::evolve_generations(glider, 4);
        assert_eq!(moved.to_text(), ".....\n..*..\n...*.\n.***.\n.....");
    }

    #[test]
    fn test_dimensions_preserved_for_degenerate_boards() {
        for (rows, columns) in [(0, 0), (1, 0), (3, 0), (0, 4), (1, 1)] {
            let next = GameOfLifeRules::evolve(&Board::new(rows, columns));
            assert_eq!((next.height(), next.width()), (rows, columns));
        }
    }
}
