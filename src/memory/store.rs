//! Owning collection of learned patterns with recognition, training and persistence
//!
//! Patterns keep insertion order. Recognition walks them in that order and
//! only replaces the best candidate on a strictly higher score, so the
//! earliest pattern wins ties. Loading never fails: a missing or corrupt
//! memory file yields an empty store.

use crate::io::configuration::{GRID_SIDE, NO_MATCH_SCORE};
use crate::io::error::{Result, invalid_parameter};
use crate::io::persistence::{read_memory, write_memory};
use crate::memory::pattern::Pattern;
use crate::spatial::Grid;
use std::path::Path;

/// Ordered set of uniquely named patterns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatternStore {
    patterns: Vec<Pattern>,
}

impl PatternStore {
    /// Create a store with no patterns
    pub const fn new() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Build a store from already validated, uniquely named patterns
    pub(crate) const fn from_patterns(patterns: Vec<Pattern>) -> Self {
        Self { patterns }
    }

    /// Number of stored patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Test if no patterns are stored
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// All patterns in insertion order
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Find a pattern by exact, case-sensitive name
    pub fn get(&self, name: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|pattern| pattern.name() == name)
    }

    /// Name and score of the best matching pattern
    ///
    /// Returns `None` unless some pattern scores strictly above zero.
    pub fn best_match(&self, query: &Grid) -> Option<(&str, f64)> {
        let mut best: Option<&Pattern> = None;
        let mut best_score = NO_MATCH_SCORE;

        for pattern in &self.patterns {
            let score = pattern.score(query);
            if score > best_score {
                best_score = score;
                best = Some(pattern);
            }
        }

        best.map(|pattern| (pattern.name(), best_score))
    }

    /// Name of the best matching pattern, if any scores above zero
    pub fn recognize(&self, query: &Grid) -> Option<&str> {
        self.best_match(query).map(|(name, _)| name)
    }

    /// Train the named pattern with an example, creating it on first use
    ///
    /// Returns the pattern's updated example count.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is empty
    pub fn train(&mut self, name: &str, example: &Grid) -> Result<usize> {
        if name.is_empty() {
            return Err(invalid_parameter(
                "name",
                &name,
                &"pattern names must not be empty",
            ));
        }

        let position = if let Some(position) = self
            .patterns
            .iter()
            .position(|pattern| pattern.name() == name)
        {
            position
        } else {
            tracing::debug!(name, "creating pattern");
            self.patterns
                .push(Pattern::cleared(name, GRID_SIDE, GRID_SIDE));
            self.patterns.len() - 1
        };

        let count = self
            .patterns
            .get_mut(position)
            .map_or(0, |pattern| pattern.train(example));
        Ok(count)
    }

    /// Pattern names in ascending lexical order
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .patterns
            .iter()
            .map(|pattern| pattern.name().to_string())
            .collect();
        names.sort();
        names
    }

    /// Load the store persisted at `path`
    ///
    /// A missing, empty or malformed file yields an empty store. Malformed
    /// content is logged as a warning.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match read_memory(path) {
            Ok(store) => {
                tracing::info!(
                    path = %path.display(),
                    patterns = store.len(),
                    "loaded pattern memory"
                );
                store
            }
            Err(error) if error.is_missing_memory() => {
                tracing::debug!(path = %path.display(), "no pattern memory found, starting empty");
                Self::new()
            }
            Err(error) => {
                tracing::warn!(%error, "discarding unreadable pattern memory");
                Self::new()
            }
        }
    }

    /// Load from `path`, seeding from `bootstrap` when `path` does not exist yet
    pub fn load_with_fallback(path: impl AsRef<Path>, bootstrap: Option<&Path>) -> Self {
        let path = path.as_ref();
        match bootstrap {
            Some(seed) if !path.exists() => {
                tracing::info!(
                    path = %path.display(),
                    seed = %seed.display(),
                    "memory file absent, using bootstrap memory"
                );
                Self::load(seed)
            }
            _ => Self::load(path),
        }
    }

    /// Persist every pattern to `path`, replacing any previous content
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        write_memory(path, self)?;
        tracing::info!(
            path = %path.display(),
            patterns = self.len(),
            "saved pattern memory"
        );
        Ok(())
    }
}
