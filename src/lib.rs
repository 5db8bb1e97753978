//! Sketch recognition through a trainable memory of averaged pattern grids
//!
//! A drawn bitmap is cropped to its ink, squared, and resampled into a fixed
//! binary feature grid. The pattern memory scores that grid against the mean
//! ink weights of every learned symbol and can fold new examples into a
//! symbol's running average. The memory persists as a JSON document.

#![forbid(unsafe_code)]

/// Normalization of raw sketches into fixed-size feature grids
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Learned patterns and the pattern store
pub mod memory;
/// Binary grids and pixel sources
pub mod spatial;

pub use analysis::normalizer::normalize;
pub use io::error::{Result, SketchError};
pub use memory::{Pattern, PatternStore};
pub use spatial::{Bitmap, Grid};
