//! A single learned symbol: its name, example count and mean ink weights

use crate::io::configuration::GRID_SIDE;
use crate::spatial::Grid;
use ndarray::Array2;

/// Learned symbol holding the per-cell mean of every example trained into it
///
/// `weight[(row, col)]` is the fraction of training examples that had ink at
/// that cell, so every weight stays within `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    name: String,
    example_count: usize,
    weight: Array2<f64>,
}

impl Pattern {
    /// Create an untrained pattern with a `GRID_SIDE x GRID_SIDE` weight matrix
    pub fn new(name: impl Into<String>) -> Self {
        Self::cleared(name, GRID_SIDE, GRID_SIDE)
    }

    /// Create an untrained pattern with a zeroed `width x height` weight matrix
    pub fn cleared(name: impl Into<String>, width: usize, height: usize) -> Self {
        Self {
            name: name.into(),
            example_count: 0,
            weight: Array2::zeros((height, width)),
        }
    }

    /// Rebuild a pattern from persisted parts
    ///
    /// Callers are responsible for validating the weight matrix.
    pub(crate) const fn from_parts(name: String, example_count: usize, weight: Array2<f64>) -> Self {
        Self {
            name,
            example_count,
            weight,
        }
    }

    /// Symbol name, fixed at creation
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of examples folded into the weights so far
    pub const fn example_count(&self) -> usize {
        self.example_count
    }

    /// Mean ink weight per cell, indexed `(row, col)`
    pub const fn weight(&self) -> &Array2<f64> {
        &self.weight
    }

    /// Similarity of a query grid to this pattern
    ///
    /// Sum of the weights under every ink cell of the query. Ink outside the
    /// weight matrix contributes nothing, so a blank query always scores 0.
    pub fn score(&self, query: &Grid) -> f64 {
        query
            .ink_cells()
            .filter_map(|(row, col)| self.weight.get((row, col)))
            .sum()
    }

    /// Fold one example into the running per-cell mean
    ///
    /// Cells missing from the example count as background. Returns the
    /// updated example count.
    pub fn train(&mut self, example: &Grid) -> usize {
        let divisor = (self.example_count + 1) as f64;
        for ((row, col), weight) in self.weight.indexed_iter_mut() {
            let sample = if example.get(row, col) { 1.0 } else { 0.0 };
            *weight += (sample - *weight) / divisor;
        }
        self.example_count += 1;
        self.example_count
    }
}
