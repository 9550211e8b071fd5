//! Batch driver: runs the generator over many files.
//!
//! Per-file failures are collected and never stop the remaining files from
//! being processed. Only an invalid root aborts the batch, before any file is
//! touched.

use std::path::{Path, PathBuf};

use crate::core::{
    GenerationError, GenerationResult,
    generator::{Generator, Outcome, SkipReason},
};

/// Check that `root` is a directory and return its absolute path.
pub fn validate_root(root: &Path) -> GenerationResult<PathBuf> {
    if !root.is_dir() {
        return Err(GenerationError::InvalidRoot {
            path: root.to_path_buf(),
        });
    }
    std::path::absolute(root).map_err(|source| GenerationError::io(root, source))
}

/// Result of processing one input file.
#[derive(Debug)]
pub struct FileResult {
    pub input: PathBuf,
    pub result: GenerationResult<Outcome>,
}

/// Counts gathered over a whole batch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub generated_count: usize,
    pub up_to_date_count: usize,
    /// Non-properties and outside-root inputs.
    pub ignored_count: usize,
    pub error_count: usize,
    /// Method-name collisions across all generated files.
    pub collision_count: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.generated_count + self.up_to_date_count + self.ignored_count + self.error_count
    }

    pub fn is_success(&self) -> bool {
        self.error_count == 0
    }

    fn record(&mut self, file: &FileResult) {
        match &file.result {
            Ok(Outcome::Generated(generated)) => {
                self.generated_count += 1;
                self.collision_count += generated.collisions.len();
            }
            Ok(Outcome::Skipped {
                reason: SkipReason::UpToDate,
                ..
            }) => self.up_to_date_count += 1,
            Ok(Outcome::Skipped { .. }) => self.ignored_count += 1,
            Err(_) => self.error_count += 1,
        }
    }
}

/// Process every file in order, handing each result to `on_file` as soon as
/// it is available.
pub fn run_batch<F>(generator: &Generator, files: &[PathBuf], mut on_file: F) -> BatchSummary
where
    F: FnMut(&FileResult),
{
    let mut summary = BatchSummary::default();

    for input in files {
        let file = FileResult {
            input: input.clone(),
            result: generator.process_file(input),
        };
        summary.record(&file);
        on_file(&file);
    }

    summary
}
