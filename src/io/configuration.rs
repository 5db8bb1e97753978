//! Recognition constants and runtime configuration defaults

/// Side length of the fixed feature grid every sketch is resampled into
pub const GRID_SIDE: usize = 100;

/// RGBA value treated as empty canvas; every other pixel counts as ink
pub const BACKGROUND_PIXEL: [u8; 4] = [255, 255, 255, 255];

// Scores must strictly exceed this floor to count as a match
/// Initial best score when searching the pattern store
pub const NO_MATCH_SCORE: f64 = 0.0;

// Default values for configurable parameters
/// Memory file used when `--memory` is not given
pub const DEFAULT_MEMORY_PATH: &str = "memory.json";

/// Extension of sketch files picked up from directories
pub const IMAGE_EXTENSION: &str = "png";

// Progress bar display settings
/// Minimum number of files before a progress bar is shown
pub const PROGRESS_MIN_FILES: usize = 2;

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn,sketchmem=info";

/// Log filter used when `--quiet` is given and `RUST_LOG` is unset
pub const QUIET_LOG_FILTER: &str = "error";
