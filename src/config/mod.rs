//! Configuration management for the simulation driver

pub mod settings;

pub use settings::{
    CliOverrides, InputConfig, OutputConfig, OutputFormat, SeedingConfig, Settings,
    SimulationConfig,
};
