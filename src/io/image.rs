//! PNG loading of sketches and PNG export of grids and pattern weights

use crate::io::error::{Result, SketchError};
use crate::memory::Pattern;
use crate::spatial::Grid;
use image::{GrayImage, ImageBuffer, Luma, RgbaImage};
use std::path::Path;

const INK: Luma<u8> = Luma([0]);
const PAPER: Luma<u8> = Luma([255]);

/// Load a sketch from an image file as an RGBA bitmap
///
/// # Errors
///
/// Returns an error if:
/// - The file at the given path cannot be opened or read
/// - The file is not a valid image format
pub fn load_sketch<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| SketchError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    Ok(img.to_rgba8())
}

/// Render a grid as black ink on white paper, one pixel per cell
pub fn render_grid(grid: &Grid) -> GrayImage {
    let side = grid.side() as u32;
    ImageBuffer::from_fn(side, side, |x, y| {
        if grid.get(y as usize, x as usize) {
            INK
        } else {
            PAPER
        }
    })
}

/// Render a pattern's weights as grayscale: weight 0 is white, weight 1 black
pub fn render_pattern(pattern: &Pattern) -> GrayImage {
    let weight = pattern.weight();
    let (rows, cols) = weight.dim();
    ImageBuffer::from_fn(cols as u32, rows as u32, |x, y| {
        let value = weight
            .get((y as usize, x as usize))
            .copied()
            .unwrap_or(0.0)
            .clamp(0.0, 1.0);
        Luma([((1.0 - value) * 255.0).round() as u8])
    })
}

/// Export a normalized grid as a PNG image
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be saved to the specified path
pub fn export_grid_as_png(grid: &Grid, output_path: &Path) -> Result<()> {
    save_png(&render_grid(grid), output_path)
}

/// Export a pattern's weight map as a PNG image
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be saved to the specified path
pub fn export_pattern_as_png(pattern: &Pattern, output_path: &Path) -> Result<()> {
    save_png(&render_pattern(pattern), output_path)
}

fn save_png(img: &GrayImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent).map_err(|e| SketchError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| SketchError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
