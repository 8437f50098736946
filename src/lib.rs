//! Conway's Game of Life
//!
//! A bounded, deterministic Game of Life engine with a lossless `*`/`.` text
//! format, plus a small driver that seeds a universe and advances it on a tick.

pub mod config;
pub mod driver;
pub mod error;
pub mod game_of_life;
pub mod utils;

pub use config::Settings;
pub use error::{ErrorKind, LifeError};
pub use game_of_life::{Board, Cell, CellRow, GameOfLifeRules, Grid, Universe};

use anyhow::Result;

/// Load a universe from `text` and advance it by `generations`
pub fn simulate(text: &str, generations: usize) -> Result<Universe> {
    let mut universe = Universe::load_from(text)?;
    universe.advance(generations);
    Ok(universe)
}
