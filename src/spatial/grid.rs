//! Square binary occupancy grid used as the feature representation of a sketch
//!
//! Cells are stored row-major in a single bit vector. Out-of-range reads
//! yield background and out-of-range writes are ignored, so grids of
//! different sides can be compared cell by cell without bounds bookkeeping.

use bitvec::prelude::*;
use std::fmt;

/// Square matrix of ink (`true`) and background (`false`) cells
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: BitVec,
    side: usize,
}

impl Grid {
    /// Create a grid with every cell set to background
    pub fn new(side: usize) -> Self {
        Self {
            cells: bitvec![0; side * side],
            side,
        }
    }

    /// Build a grid by evaluating `ink(row, col)` for every cell
    pub fn from_fn(side: usize, mut ink: impl FnMut(usize, usize) -> bool) -> Self {
        let mut grid = Self::new(side);
        for row in 0..side {
            for col in 0..side {
                if ink(row, col) {
                    grid.set(row, col, true);
                }
            }
        }
        grid
    }

    /// Side length in cells
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Read a cell, treating coordinates outside the grid as background
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.index(row, col)
            .is_some_and(|index| self.cells.get(index).as_deref() == Some(&true))
    }

    /// Write a cell; coordinates outside the grid are ignored
    pub fn set(&mut self, row: usize, col: usize, ink: bool) {
        if let Some(index) = self.index(row, col) {
            self.cells.set(index, ink);
        }
    }

    /// Number of ink cells
    pub fn ink_count(&self) -> usize {
        self.cells.count_ones()
    }

    /// Test if the grid holds no ink at all
    pub fn is_blank(&self) -> bool {
        self.cells.not_any()
    }

    /// Iterate `(row, col)` of every ink cell in row-major order
    pub fn ink_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let side = self.side;
        self.cells
            .iter_ones()
            .map(move |index| (index / side, index % side))
    }

    const fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.side && col < self.side {
            Some(row * self.side + col)
        } else {
            None
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.side {
            for col in 0..self.side {
                f.write_str(if self.get(row, col) { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
