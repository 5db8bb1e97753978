//! Input/output operations and error handling

/// Command-line shell driving the pattern memory
pub mod cli;
/// Recognition constants and defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// PNG loading and export
pub mod image;
/// JSON persistence of the pattern memory
pub mod persistence;
/// Batch progress display
pub mod progress;
