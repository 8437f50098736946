//! Configuration settings for the simulation driver

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub seeding: SeedingConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub rows: usize,
    pub columns: usize,
    /// Stop after this many generations; run until interrupted when absent
    pub generations: Option<usize>,
    pub tick_interval_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedingConfig {
    /// Number of random set-live attempts; repeats may land on the same cell
    pub live_cells: usize,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InputConfig {
    /// Load the first generation from this file instead of seeding randomly
    pub pattern_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub clear_screen: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                rows: 50,
                columns: 270,
                generations: None,
                tick_interval_ms: 2000,
            },
            seeding: SeedingConfig {
                live_cells: 2000,
                seed: None,
            },
            input: InputConfig::default(),
            output: OutputConfig {
                format: OutputFormat::Text,
                clear_screen: true,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        match &self.input.pattern_file {
            Some(pattern_file) => {
                if !pattern_file.exists() {
                    anyhow::bail!("Pattern file does not exist: {}", pattern_file.display());
                }
            }
            None => {
                if self.simulation.rows == 0 || self.simulation.columns == 0 {
                    anyhow::bail!(
                        "Universe dimensions must be positive, got {}x{}",
                        self.simulation.rows,
                        self.simulation.columns
                    );
                }
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(rows) = cli_overrides.rows {
            self.simulation.rows = rows;
        }
        if let Some(columns) = cli_overrides.columns {
            self.simulation.columns = columns;
        }
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = Some(generations);
        }
        if let Some(interval) = cli_overrides.tick_interval_ms {
            self.simulation.tick_interval_ms = interval;
        }
        if let Some(live_cells) = cli_overrides.live_cells {
            self.seeding.live_cells = live_cells;
        }
        if let Some(seed) = cli_overrides.seed {
            self.seeding.seed = Some(seed);
        }
        if let Some(ref pattern_file) = cli_overrides.pattern_file {
            self.input.pattern_file = Some(pattern_file.clone());
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
        if cli_overrides.no_clear {
            self.output.clear_screen = false;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub rows: Option<usize>,
    pub columns: Option<usize>,
    pub generations: Option<usize>,
    pub tick_interval_ms: Option<u64>,
    pub live_cells: Option<usize>,
    pub seed: Option<u64>,
    pub pattern_file: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub no_clear: bool,
}
