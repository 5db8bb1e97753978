//! Command-line shell that drives the pattern memory with PNG sketches

use crate::analysis::normalizer::normalize;
use crate::io::configuration::{DEFAULT_MEMORY_PATH, IMAGE_EXTENSION};
use crate::io::error::{Result, SketchError, invalid_parameter};
use crate::io::image::{export_grid_as_png, export_pattern_as_png, load_sketch};
use crate::io::progress::BatchProgress;
use crate::memory::{Pattern, PatternStore};
use crate::spatial::{Bitmap, Grid};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "sketchmem")]
#[command(
    author,
    version,
    about = "Recognize and learn hand-drawn symbols from PNG sketches"
)]
/// Command-line arguments for the sketch memory tool
pub struct Cli {
    /// Pattern memory file read at start and written after training
    #[arg(long, global = true, value_name = "PATH", default_value = DEFAULT_MEMORY_PATH)]
    pub memory: PathBuf,

    /// Read-only memory used when the memory file does not exist yet
    #[arg(long, global = true, value_name = "PATH")]
    pub bootstrap: Option<PathBuf>,

    /// Suppress progress output and informational logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Operations offered by the command-line shell
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Recognize a PNG sketch or every PNG in a directory
    Recognize {
        /// PNG file or directory to recognize
        #[arg(value_name = "TARGET")]
        target: PathBuf,

        /// Symbol the sketches are expected to show
        #[arg(short, long, value_name = "NAME")]
        expect: Option<String>,
    },

    /// Train a named symbol with a PNG sketch or every PNG in a directory
    Train {
        /// Symbol name to train
        #[arg(value_name = "NAME")]
        name: String,

        /// PNG file or directory of training examples
        #[arg(value_name = "TARGET")]
        target: PathBuf,
    },

    /// List known symbols with their example counts
    List,

    /// Write the normalized feature grid of a sketch as a PNG
    Normalize {
        /// Sketch to normalize
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Destination PNG
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },

    /// Write the learned weight map of a symbol as a PNG
    Show {
        /// Symbol name to render
        #[arg(value_name = "NAME")]
        name: String,

        /// Destination PNG
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Result of recognizing one sketch
#[derive(Debug, Clone, PartialEq)]
pub enum Recognition {
    /// The sketch holds no ink
    NothingDrawn,
    /// No pattern scored above zero
    Unknown,
    /// Best matching pattern and its score
    Match {
        /// Recognized symbol name
        name: String,
        /// Similarity score of the match
        score: f64,
    },
}

impl Recognition {
    /// Recognize a normalized grid (or its absence) against a store
    pub fn of(store: &PatternStore, grid: Option<&Grid>) -> Self {
        match grid {
            None => Self::NothingDrawn,
            Some(grid) => store
                .best_match(grid)
                .map_or(Self::Unknown, |(name, score)| Self::Match {
                    name: name.to_string(),
                    score,
                }),
        }
    }

    /// Recognized name, if any
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Match { name, .. } => Some(name),
            Self::NothingDrawn | Self::Unknown => None,
        }
    }
}

/// Normalize a whole bitmap, using its full extent as the drawable area
pub fn normalize_sketch<B: Bitmap + ?Sized>(bitmap: &B) -> Option<Grid> {
    normalize(bitmap, bitmap.width(), bitmap.height())
}

/// Collect the sketch files named by a target path
///
/// A file target must carry the PNG extension; a directory target yields its
/// PNG files in sorted order.
///
/// # Errors
///
/// Returns an error if the target is neither a PNG file nor a readable directory
pub fn collect_sketches(target: &Path) -> Result<Vec<PathBuf>> {
    if target.is_file() {
        if has_image_extension(target) {
            Ok(vec![target.to_path_buf()])
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"target file must be a PNG image",
            ))
        }
    } else if target.is_dir() {
        let entries = std::fs::read_dir(target).map_err(|e| SketchError::FileSystem {
            path: target.to_path_buf(),
            operation: "read directory",
            source: e,
        })?;
        let mut files = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.is_file() && has_image_extension(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    } else {
        Err(invalid_parameter(
            "target",
            &target.display(),
            &"target must be a PNG file or directory",
        ))
    }
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(IMAGE_EXTENSION))
}

/// Recognize every sketch file, pairing each path with its result
///
/// # Errors
///
/// Returns an error if any sketch cannot be loaded
pub fn recognize_files(
    store: &PatternStore,
    files: &[PathBuf],
    show_progress: bool,
) -> Result<Vec<(PathBuf, Recognition)>> {
    let progress = BatchProgress::new("recognize", files.len(), show_progress);
    let mut results = Vec::with_capacity(files.len());

    for file in files {
        progress.start_file(file);
        let sketch = load_sketch(file)?;
        let grid = normalize_sketch(&sketch);
        results.push((file.clone(), Recognition::of(store, grid.as_ref())));
        progress.complete_file();
    }

    progress.finish();
    Ok(results)
}

/// Train `name` with every non-blank sketch file
///
/// Blank sketches are skipped with a warning. Returns the number of
/// examples trained.
///
/// # Errors
///
/// Returns an error if a sketch cannot be loaded or the name is empty
pub fn train_files(
    store: &mut PatternStore,
    name: &str,
    files: &[PathBuf],
    show_progress: bool,
) -> Result<usize> {
    let progress = BatchProgress::new("train", files.len(), show_progress);
    let mut trained = 0;

    for file in files {
        progress.start_file(file);
        let sketch = load_sketch(file)?;
        if let Some(grid) = normalize_sketch(&sketch) {
            let count = store.train(name, &grid)?;
            tracing::debug!(name, count, file = %file.display(), "trained example");
            trained += 1;
        } else {
            tracing::warn!(file = %file.display(), "skipping blank sketch");
        }
        progress.complete_file();
    }

    progress.finish();
    Ok(trained)
}

/// Runs one command against a pattern memory session
pub struct Session {
    cli: Cli,
    store: PatternStore,
}

impl Session {
    /// Open the memory named by the CLI arguments
    pub fn open(cli: Cli) -> Self {
        let store = PatternStore::load_with_fallback(&cli.memory, cli.bootstrap.as_deref());
        Self { cli, store }
    }

    /// The loaded pattern memory
    pub const fn store(&self) -> &PatternStore {
        &self.store
    }

    /// Execute the requested command
    ///
    /// Returns a failure exit code when `recognize --expect` sees a sketch
    /// that does not match the expected symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if a sketch cannot be read, a symbol is unknown, or
    /// an output file cannot be written
    // Allow print for command results
    #[allow(clippy::print_stdout)]
    pub fn run(&mut self) -> Result<ExitCode> {
        let show_progress = self.cli.should_show_progress();

        match self.cli.command.clone() {
            Command::Recognize { target, expect } => {
                let files = collect_sketches(&target)?;
                let results = recognize_files(&self.store, &files, show_progress)?;

                let mut mismatches = 0usize;
                for (path, recognition) in &results {
                    let verdict = match recognition {
                        Recognition::NothingDrawn => "nothing drawn".to_string(),
                        Recognition::Unknown => "unknown".to_string(),
                        Recognition::Match { name, score } => format!("{name} ({score:.2})"),
                    };
                    println!("{}: {verdict}", path.display());

                    if let Some(expected) = &expect {
                        if recognition.name() != Some(expected.as_str()) {
                            mismatches += 1;
                        }
                    }
                }

                if expect.is_some() {
                    println!("{} of {} matched", results.len() - mismatches, results.len());
                }
                Ok(if mismatches == 0 {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::FAILURE
                })
            }
            Command::Train { name, target } => {
                let files = collect_sketches(&target)?;
                let trained = train_files(&mut self.store, &name, &files, show_progress)?;
                self.store.save(&self.cli.memory)?;

                let total = self
                    .store
                    .get(&name)
                    .map_or(0, Pattern::example_count);
                println!("{name}: trained {trained} example(s), {total} in memory");
                Ok(ExitCode::SUCCESS)
            }
            Command::List => {
                for name in self.store.names() {
                    let count = self
                        .store
                        .get(&name)
                        .map_or(0, Pattern::example_count);
                    println!("{name}\t{count}");
                }
                Ok(ExitCode::SUCCESS)
            }
            Command::Normalize { input, output } => {
                let sketch = load_sketch(&input)?;
                let grid = normalize_sketch(&sketch)
                    .ok_or(SketchError::EmptyCanvas { path: input })?;
                export_grid_as_png(&grid, &output)?;
                Ok(ExitCode::SUCCESS)
            }
            Command::Show { name, output } => {
                let pattern = self.store.get(&name).ok_or_else(|| {
                    invalid_parameter("name", &name, &"no pattern with this name in memory")
                })?;
                export_pattern_as_png(pattern, &output)?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}
