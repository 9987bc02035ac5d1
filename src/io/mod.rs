//! Input/output surface: CLI, configuration, errors, progress, rendering

/// Command-line interface and generation session driver
pub mod cli;
/// Default constants and runtime configuration values
pub mod configuration;
/// Error types for generation and export operations
pub mod error;
/// PNG rendering of a finished grid
pub mod image;
/// Progress display for the attempt loop
pub mod progress;
