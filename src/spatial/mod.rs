//! Spatial data structures for sketches
//!
//! This module contains spatial-related functionality including:
//! - Binary occupancy grids
//! - Pixel sources scanned for ink

/// Pixel source abstraction over raster images
pub mod bitmap;
/// Square binary occupancy grid
pub mod grid;

pub use bitmap::Bitmap;
pub use grid::Grid;
