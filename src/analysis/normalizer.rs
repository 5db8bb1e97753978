//! Sketch normalization: crop to drawn content, square it, resample to a fixed grid

use crate::io::configuration::GRID_SIDE;
use crate::spatial::{Bitmap, Grid};

/// Tightest axis-aligned rectangle enclosing every ink pixel (inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InkBounds {
    /// Leftmost ink column
    pub min_x: u32,
    /// Rightmost ink column
    pub max_x: u32,
    /// Topmost ink row
    pub min_y: u32,
    /// Bottommost ink row
    pub max_y: u32,
}

impl InkBounds {
    /// Horizontal span (`max_x - min_x`)
    pub const fn span_x(&self) -> u32 {
        self.max_x - self.min_x
    }

    /// Vertical span (`max_y - min_y`)
    pub const fn span_y(&self) -> u32 {
        self.max_y - self.min_y
    }
}

/// Locate drawn content inside the drawable `width x height` area of a bitmap
///
/// Each edge is found by its own scan that stops at the first ink pixel:
/// rows from the top, rows from the bottom, columns from the left, columns
/// from the right. Pixels beyond the bitmap's own dimensions are never read.
/// Returns `None` when the area holds no ink.
pub fn find_ink_bounds<B: Bitmap + ?Sized>(
    bitmap: &B,
    width: u32,
    height: u32,
) -> Option<InkBounds> {
    let width = width.min(bitmap.width());
    let height = height.min(bitmap.height());
    let row_has_ink = |y: u32| (0..width).any(|x| bitmap.is_ink(x, y));
    let col_has_ink = |x: u32| (0..height).any(|y| bitmap.is_ink(x, y));

    // A blank canvas fails the first scan, so the remaining scans always hit
    let min_y = (0..height).find(|&y| row_has_ink(y))?;
    let max_y = (0..height).rev().find(|&y| row_has_ink(y))?;
    let min_x = (0..width).find(|&x| col_has_ink(x))?;
    let max_x = (0..width).rev().find(|&x| col_has_ink(x))?;

    Some(InkBounds {
        min_x,
        max_x,
        min_y,
        max_y,
    })
}

/// Crop a bitmap to its drawn content and square the result
///
/// The square side is the longer span plus one. The shorter axis is centered
/// using half the span difference (floor), so the window may overshoot the
/// drawable area; such cells are background. The result keeps native
/// resolution and is not yet `GRID_SIDE` wide.
pub fn crop_to_bounding_box<B: Bitmap + ?Sized>(
    bitmap: &B,
    width: u32,
    height: u32,
) -> Option<Grid> {
    let bounds = find_ink_bounds(bitmap, width, height)?;
    let (span_x, span_y) = (bounds.span_x(), bounds.span_y());

    let size = span_x.max(span_y) as usize + 1;
    let offset_x = i64::from(span_y.saturating_sub(span_x) / 2);
    let offset_y = i64::from(span_x.saturating_sub(span_y) / 2);

    let limit_x = i64::from(width.min(bitmap.width()));
    let limit_y = i64::from(height.min(bitmap.height()));

    Some(Grid::from_fn(size, |row, col| {
        let x = i64::from(bounds.min_x) + col as i64 - offset_x;
        let y = i64::from(bounds.min_y) + row as i64 - offset_y;
        (0..limit_x).contains(&x)
            && (0..limit_y).contains(&y)
            && bitmap.is_ink(x as u32, y as u32)
    }))
}

/// Resample a square grid of any side into a `side x side` grid
///
/// Every source cell maps to `floor(src * side / source_side)` on each axis.
/// A destination cell only accepts a write while it still holds background,
/// so the first ink cell in row-major source order wins. Smaller sources are
/// upsampled with gaps: destinations that no source cell maps to stay empty.
pub fn resample(source: &Grid, side: usize) -> Grid {
    let mut target = Grid::new(side);
    let source_side = source.side();
    if source_side == 0 {
        return target;
    }

    for row in 0..source_side {
        for col in 0..source_side {
            let target_row = row * side / source_side;
            let target_col = col * side / source_side;
            if !target.get(target_row, target_col) {
                target.set(target_row, target_col, source.get(row, col));
            }
        }
    }
    target
}

/// Resample into the fixed `GRID_SIDE x GRID_SIDE` feature grid
pub fn resample_to_fixed_grid(source: &Grid) -> Grid {
    resample(source, GRID_SIDE)
}

/// Full normalization pipeline: crop, square and resample
///
/// Returns `None` when nothing was drawn inside the drawable area.
pub fn normalize<B: Bitmap + ?Sized>(bitmap: &B, width: u32, height: u32) -> Option<Grid> {
    crop_to_bounding_box(bitmap, width, height).map(|cropped| resample_to_fixed_grid(&cropped))
}
