//! Error types for sketch normalization, pattern memory and persistence

use std::fmt;
use std::path::PathBuf;

/// Main error type for all sketch memory operations
#[derive(Debug)]
pub enum SketchError {
    /// Failed to load a sketch image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a rendered grid or weight map to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Persisted memory file does not exist
    MissingMemory {
        /// Path that was looked up
        path: PathBuf,
    },

    /// Persisted memory is not valid JSON for the record shape
    Decode {
        /// Path of the memory file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Persisted memory decoded but violates a pattern invariant
    MalformedMemory {
        /// Path of the memory file
        path: PathBuf,
        /// Description of the violated invariant
        reason: String,
    },

    /// Pattern memory could not be serialized
    Encode {
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Sketch contains no ink pixels
    EmptyCanvas {
        /// Path of the blank sketch
        path: PathBuf,
    },
}

impl fmt::Display for SketchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::MissingMemory { path } => {
                write!(f, "Memory file '{}' does not exist", path.display())
            }
            Self::Decode { path, source } => {
                write!(
                    f,
                    "Failed to decode memory file '{}': {source}",
                    path.display()
                )
            }
            Self::MalformedMemory { path, reason } => {
                write!(f, "Malformed memory file '{}': {reason}", path.display())
            }
            Self::Encode { source } => {
                write!(f, "Failed to encode pattern memory: {source}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::EmptyCanvas { path } => {
                write!(f, "Nothing was drawn in '{}'", path.display())
            }
        }
    }
}

impl std::error::Error for SketchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Decode { source, .. } | Self::Encode { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for sketch memory results
pub type Result<T> = std::result::Result<T, SketchError>;

impl From<std::io::Error> for SketchError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SketchError {
    SketchError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a malformed memory error for the given file
pub fn malformed_memory(path: impl Into<PathBuf>, reason: &impl ToString) -> SketchError {
    SketchError::MalformedMemory {
        path: path.into(),
        reason: reason.to_string(),
    }
}

impl SketchError {
    /// Whether this error means the memory file was absent rather than broken
    pub const fn is_missing_memory(&self) -> bool {
        matches!(self, Self::MissingMemory { .. })
    }
}
