//! Game of Life core functionality

pub mod board;
pub mod cell;
pub mod grid;
pub mod io;
pub mod row;
pub mod rules;
pub mod universe;

pub use board::{Board, LINE_SEPARATOR};
pub use cell::Cell;
pub use grid::Grid;
pub use io::{create_example_patterns, load_board_from_file, save_board_to_file};
pub use row::CellRow;
pub use rules::GameOfLifeRules;
pub use universe::{advance_independent, Universe};
