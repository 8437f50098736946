//! Interactive driver: seeds a universe, then renders and advances it on a fixed tick

use crate::config::{OutputFormat, Settings};
use crate::error::Result as LifeResult;
use crate::game_of_life::{load_board_from_file, Universe};
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::time::Duration;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Make `attempts` random cells live. Coordinates are drawn inside the universe,
/// so repeats may hit the same cell.
pub fn seed_universe<R: Rng + ?Sized>(
    universe: &mut Universe,
    attempts: usize,
    rng: &mut R,
) -> LifeResult<()> {
    let (rows, columns) = (universe.height(), universe.width());
    if rows == 0 || columns == 0 {
        return Ok(());
    }

    for _ in 0..attempts {
        universe.set_live_cell_at(rng.gen_range(0..rows), rng.gen_range(0..columns))?;
    }
    Ok(())
}

/// Build the first generation from a pattern file, or seed a fresh universe randomly
pub fn build_universe(settings: &Settings) -> Result<Universe> {
    if let Some(path) = &settings.input.pattern_file {
        let board = load_board_from_file(path)?;
        tracing::info!(
            path = %path.display(),
            rows = board.height(),
            columns = board.width(),
            "loaded pattern"
        );
        return Ok(Universe::from_board(board));
    }

    let mut universe = Universe::new(settings.simulation.rows, settings.simulation.columns);
    let mut rng = match settings.seeding.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    seed_universe(&mut universe, settings.seeding.live_cells, &mut rng)
        .context("Failed to seed universe")?;

    tracing::info!(
        rows = universe.height(),
        columns = universe.width(),
        living = universe.board().living_count(),
        "seeded universe"
    );
    Ok(universe)
}

/// Serializable view of one generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub generation: u64,
    pub rows: usize,
    pub columns: usize,
    pub living: usize,
    pub lines: Vec<String>,
}

impl Snapshot {
    pub fn of(universe: &Universe) -> Self {
        let board = universe.board();
        Self {
            generation: universe.generation(),
            rows: board.height(),
            columns: board.width(),
            living: board.living_count(),
            lines: board
                .grid()
                .rows()
                .map(|row| row.iter().map(|cell| cell.to_char()).collect())
                .collect(),
        }
    }
}

/// Render a universe in the configured output format
pub fn render<W: Write>(out: &mut W, universe: &Universe, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", universe.grid())?,
        OutputFormat::Json => {
            let json = serde_json::to_string(&Snapshot::of(universe))
                .context("Failed to serialize snapshot")?;
            writeln!(out, "{}", json)?;
        }
    }
    Ok(())
}

/// Runs the display/advance loop over a single universe
pub struct Driver<W: Write> {
    universe: Universe,
    settings: Settings,
    out: W,
}

impl<W: Write> Driver<W> {
    pub fn new(universe: Universe, settings: Settings, out: W) -> Self {
        Self {
            universe,
            settings,
            out,
        }
    }

    /// Render and advance until the configured generation limit.
    /// Without a limit this only returns on an output error.
    pub fn run(&mut self) -> Result<()> {
        let interval = Duration::from_millis(self.settings.simulation.tick_interval_ms);
        tracing::info!(
            generations = ?self.settings.simulation.generations,
            interval_ms = self.settings.simulation.tick_interval_ms,
            "starting simulation"
        );

        loop {
            self.render_frame()?;

            if let Some(limit) = self.settings.simulation.generations {
                if self.universe.generation() >= limit as u64 {
                    break;
                }
            }

            self.universe.create_next_generation();
            if !interval.is_zero() {
                std::thread::sleep(interval);
            }
        }

        tracing::info!(generation = self.universe.generation(), "simulation finished");
        Ok(())
    }

    fn render_frame(&mut self) -> Result<()> {
        if self.settings.output.clear_screen {
            write!(self.out, "{}", CLEAR_SCREEN)?;
        }
        render(&mut self.out, &self.universe, self.settings.output.format)?;
        self.out.flush().context("Failed to flush output")?;
        Ok(())
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    pub fn into_universe(self) -> Universe {
        self.universe
    }
}
