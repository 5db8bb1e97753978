//! JSON encoding of the pattern memory
//!
//! The file holds one array of pattern records, each carrying its weight
//! matrix flattened row-major together with the matrix side:
//!
//! ```json
//! [{"name":"circle","example_count":3,"side":100,"weight":[0.0, ...]}]
//! ```
//!
//! Decoding is all-or-nothing. Any record that violates a pattern invariant
//! rejects the whole file.

use crate::io::configuration::GRID_SIDE;
use crate::io::error::{Result, SketchError, malformed_memory};
use crate::memory::{Pattern, PatternStore};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// On-disk shape of a single pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternRecord {
    /// Unique, non-empty symbol name
    pub name: String,
    /// Number of examples folded into the weights
    pub example_count: usize,
    /// Side of the square weight matrix
    pub side: usize,
    /// Weight matrix flattened row-major, `side * side` values
    pub weight: Vec<f64>,
}

impl From<&Pattern> for PatternRecord {
    fn from(pattern: &Pattern) -> Self {
        let weight = pattern.weight();
        Self {
            name: pattern.name().to_string(),
            example_count: pattern.example_count(),
            side: weight.nrows(),
            weight: weight.iter().copied().collect(),
        }
    }
}

impl PatternRecord {
    /// Validate the record and rebuild the pattern it describes
    ///
    /// # Errors
    ///
    /// Returns a reason string if the name is empty, the side differs from
    /// `GRID_SIDE`, the weight count does not match the side, or any weight
    /// is non-finite or outside `[0, 1]`
    pub fn into_pattern(self) -> std::result::Result<Pattern, String> {
        if self.name.is_empty() {
            return Err("pattern with empty name".to_string());
        }
        if self.side != GRID_SIDE {
            return Err(format!(
                "pattern '{}' has side {} but the grid side is {GRID_SIDE}",
                self.name, self.side
            ));
        }
        if let Some(bad) = self
            .weight
            .iter()
            .find(|value| !value.is_finite() || !(0.0..=1.0).contains(*value))
        {
            return Err(format!(
                "pattern '{}' has weight {bad} outside [0, 1]",
                self.name
            ));
        }

        if self.weight.len() != self.side * self.side {
            return Err(format!(
                "pattern '{}' has {} weights, expected {}",
                self.name,
                self.weight.len(),
                self.side * self.side
            ));
        }
        let weight = Array2::from_shape_vec((self.side, self.side), self.weight)
            .map_err(|e| format!("pattern weight matrix could not be shaped: {e}"))?;

        Ok(Pattern::from_parts(self.name, self.example_count, weight))
    }
}

/// Encode a store as its JSON document
///
/// # Errors
///
/// Returns an error if JSON serialization fails
pub fn encode_memory(store: &PatternStore) -> Result<String> {
    let records: Vec<PatternRecord> = store.patterns().iter().map(PatternRecord::from).collect();
    serde_json::to_string(&records).map_err(|source| SketchError::Encode { source })
}

/// Decode a JSON document into a store; `path` is only used for error reports
///
/// Empty or whitespace-only content decodes to an empty store.
///
/// # Errors
///
/// Returns an error if the content is not a valid record array or any record
/// breaks a pattern invariant, including duplicate names
pub fn decode_memory(content: &str, path: &Path) -> Result<PatternStore> {
    if content.trim().is_empty() {
        return Ok(PatternStore::new());
    }

    let records: Vec<PatternRecord> =
        serde_json::from_str(content).map_err(|source| SketchError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    let mut seen = HashSet::with_capacity(records.len());
    let mut patterns = Vec::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.name.clone()) {
            return Err(malformed_memory(
                path,
                &format!("duplicate pattern name '{}'", record.name),
            ));
        }
        let pattern = record
            .into_pattern()
            .map_err(|reason| malformed_memory(path, &reason))?;
        patterns.push(pattern);
    }

    Ok(PatternStore::from_patterns(patterns))
}

/// Read the pattern memory stored at `path`
///
/// # Errors
///
/// Returns `MissingMemory` if the file does not exist, a file system error
/// if it cannot be read, and a decode or malformed error for bad content
pub fn read_memory(path: &Path) -> Result<PatternStore> {
    if !path.exists() {
        return Err(SketchError::MissingMemory {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| SketchError::FileSystem {
        path: path.to_path_buf(),
        operation: "read memory",
        source: e,
    })?;

    decode_memory(&content, path)
}

/// Write the pattern memory to `path`, creating parent directories
///
/// # Errors
///
/// Returns an error if encoding fails, the parent directory cannot be
/// created, or the file cannot be written
pub fn write_memory(path: &Path, store: &PatternStore) -> Result<()> {
    let mut json = encode_memory(store)?;
    json.push('\n');

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| SketchError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    fs::write(path, json).map_err(|e| SketchError::FileSystem {
        path: path.to_path_buf(),
        operation: "write memory",
        source: e,
    })
}
