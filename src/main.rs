//! Main CLI application for the Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life::{
    config::{CliOverrides, OutputFormat, Settings},
    driver::{self, Driver},
    game_of_life::{create_example_patterns, load_board_from_file, Universe},
    utils::{BoardFormatter, ColorOutput},
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "game_of_life")]
#[command(about = "Conway's Game of Life in the terminal")]
#[command(version = "0.1.0")]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed a universe and animate it in the terminal
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Start from this pattern file instead of random seeding
        #[arg(short, long)]
        pattern: Option<PathBuf>,

        #[arg(long)]
        rows: Option<usize>,

        #[arg(long)]
        columns: Option<usize>,

        /// Stop after this many generations
        #[arg(short, long)]
        generations: Option<usize>,

        /// Delay between generations in milliseconds
        #[arg(short, long)]
        interval: Option<u64>,

        /// Number of random cells to bring to life
        #[arg(long)]
        live_cells: Option<usize>,

        /// Seed for the random number generator
        #[arg(long)]
        seed: Option<u64>,

        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Do not clear the screen between frames
        #[arg(long)]
        no_clear: bool,
    },

    /// Advance a pattern file by a number of generations and print the result
    Step {
        /// Pattern file
        pattern: PathBuf,

        #[arg(short, long, default_value_t = 1)]
        generations: usize,

        /// Show row and column numbers
        #[arg(long, conflicts_with = "compact")]
        coords: bool,

        /// Draw cells as blocks instead of glyphs
        #[arg(long)]
        compact: bool,
    },

    /// Create a default configuration and example patterns
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match execute(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", format_error(&err));
            ExitCode::FAILURE
        }
    }
}

/// Error line printed before a failing exit, including every cause
fn format_error(err: &anyhow::Error) -> String {
    ColorOutput::error(&format!("Error: {:#}", err))
}

fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Run {
            config,
            pattern,
            rows,
            columns,
            generations,
            interval,
            live_cells,
            seed,
            format,
            no_clear,
        } => {
            let overrides = CliOverrides {
                rows,
                columns,
                generations,
                tick_interval_ms: interval,
                live_cells,
                seed,
                pattern_file: pattern,
                format,
                no_clear,
            };
            run_command(&config, &overrides)
        }
        Commands::Step {
            pattern,
            generations,
            coords,
            compact,
        } => {
            let view = if coords {
                StepView::Coords
            } else if compact {
                StepView::Compact
            } else {
                StepView::Text
            };
            step_command(&pattern, generations, view)
        }
        Commands::Setup { directory, force } => setup_command(&directory, force),
    }
}

fn load_settings(config_path: &Path) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        tracing::warn!(path = %config_path.display(), "config file not found, using defaults");
        Ok(Settings::default())
    }
}

fn run_command(config_path: &Path, overrides: &CliOverrides) -> Result<()> {
    let mut settings = load_settings(config_path)?;
    settings.merge_with_cli(overrides);
    settings
        .validate()
        .context("Configuration validation failed")?;

    let universe = driver::build_universe(&settings)?;
    let stdout = std::io::stdout();
    let mut driver = Driver::new(universe, settings, stdout.lock());
    driver.run()
}

/// How `step` draws the final board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepView {
    Text,
    Coords,
    Compact,
}

fn step_command(pattern: &Path, generations: usize, view: StepView) -> Result<()> {
    let board = load_board_from_file(pattern)?;
    print!("{}", render_step(Universe::from_board(board), generations, view));
    Ok(())
}

fn render_step(mut universe: Universe, generations: usize, view: StepView) -> String {
    let mut output = String::new();
    output.push_str(&ColorOutput::info(&BoardFormatter::summary(universe.board())));
    output.push('\n');

    universe.advance(generations);

    output.push_str(&ColorOutput::success(&format!(
        "After {} generation(s):",
        universe.generation()
    )));
    output.push('\n');
    match view {
        StepView::Text => {
            output.push_str(&universe.grid());
            output.push('\n');
        }
        StepView::Coords => output.push_str(&BoardFormatter::format_with_coords(universe.board())),
        StepView::Compact => output.push_str(&BoardFormatter::format_compact(universe.board())),
    }
    output.push_str(&BoardFormatter::summary(universe.board()));
    output.push('\n');
    output
}

fn setup_command(directory: &Path, force: bool) -> Result<()> {
    let config_path = directory.join("config/default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!("Skipped: {} (already exists)", config_path.display()))
        );
    }

    let patterns_dir = directory.join("patterns");
    create_example_patterns(&patterns_dir).context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", patterns_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("Run: cargo run -- run --pattern patterns/glider.txt --rows 20 --columns 40");

    Ok(())
}
