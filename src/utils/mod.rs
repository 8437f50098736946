//! Utility functions and helpers

pub mod display;

pub use display::{BoardFormatter, ColorOutput, Tone};
