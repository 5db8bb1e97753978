//! Read-only pixel sources that distinguish ink from background

use crate::io::configuration::BACKGROUND_PIXEL;
use image::RgbaImage;

/// A raster the normalizer can scan for drawn content
pub trait Bitmap {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Test whether the pixel at `(x, y)` differs from background
    ///
    /// Coordinates outside the raster are background.
    fn is_ink(&self, x: u32, y: u32) -> bool;
}

impl Bitmap for RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    // Anything but pure opaque white counts as ink
    fn is_ink(&self, x: u32, y: u32) -> bool {
        self.get_pixel_checked(x, y)
            .is_some_and(|pixel| pixel.0 != BACKGROUND_PIXEL)
    }
}
