//! Tests for sketch loading and PNG rendering of grids and pattern weights

#[cfg(test)]
mod tests {
    use crate::{canvas, grid_with};
    use image::Luma;
    use sketchmem::io::configuration::GRID_SIDE;
    use sketchmem::io::image::{
        export_grid_as_png, export_pattern_as_png, load_sketch, render_grid, render_pattern,
    };
    use sketchmem::{Grid, Pattern, SketchError};

    // Tests grids render black ink on white with x as column
    // Verified by transposing the rendered image
    #[test]
    fn test_render_grid_colors() {
        let img = render_grid(&grid_with(3, &[(0, 2)]));

        assert_eq!(img.dimensions(), (3, 3));
        assert_eq!(img.get_pixel(2, 0), &Luma([0]));
        assert_eq!(img.get_pixel(0, 2), &Luma([255]));
    }

    // Tests pattern weights map to grayscale intensity
    // Verified by mapping weight one to white
    #[test]
    fn test_render_pattern_grayscale() {
        let mut pattern = Pattern::new("half");
        pattern.train(&grid_with(GRID_SIDE, &[(0, 0), (0, 1)]));
        pattern.train(&grid_with(GRID_SIDE, &[(0, 0)]));

        let img = render_pattern(&pattern);
        assert_eq!(img.dimensions(), (GRID_SIDE as u32, GRID_SIDE as u32));
        assert_eq!(img.get_pixel(0, 0), &Luma([0]));
        assert_eq!(img.get_pixel(1, 0), &Luma([128]));
        assert_eq!(img.get_pixel(5, 5), &Luma([255]));
    }

    // Tests a saved sketch loads back with the same ink
    // Verified by loading with a different color conversion
    #[test]
    fn test_load_sketch_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sketch.png");
        let original = canvas(8, 6, &[(1, 2), (7, 5)]);
        original.save(&path).unwrap();

        let Ok(loaded) = load_sketch(&path) else {
            unreachable!("sketch should load");
        };
        assert_eq!(loaded, original);
    }

    // Tests loading a missing file reports an image load error
    // Verified by returning an empty bitmap instead
    #[test]
    fn test_load_sketch_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let result = load_sketch(dir.path().join("missing.png"));
        assert!(matches!(result, Err(SketchError::ImageLoad { .. })));
    }

    // Tests exports create parent directories and PNG files
    // Verified by disabling the file save operation
    #[test]
    fn test_exports_create_files() {
        let dir = tempfile::tempdir().unwrap();
        let grid_path = dir.path().join("out").join("grid.png");
        let pattern_path = dir.path().join("out").join("pattern.png");

        let mut pattern = Pattern::new("p");
        pattern.train(&Grid::from_fn(GRID_SIDE, |row, col| row == col));

        assert!(export_grid_as_png(&grid_with(4, &[(1, 1)]), &grid_path).is_ok());
        assert!(export_pattern_as_png(&pattern, &pattern_path).is_ok());
        assert!(grid_path.exists());
        assert!(pattern_path.exists());
    }
}
