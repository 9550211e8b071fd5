use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use crate::core::generator::is_properties_file;

/// Result of scanning a source root.
pub struct ScanResult {
    /// Properties files in sorted path order.
    pub files: Vec<PathBuf>,
    /// Entries that could not be read while walking.
    pub skipped_count: usize,
}

/// Find every `*.properties` file under `root`.
///
/// `ignore_patterns` are glob patterns matched against paths relative to `root`
/// (e.g., `"**/test/**"`). Invalid patterns are reported in verbose mode and
/// otherwise ignored.
pub fn scan_properties_files(root: &Path, ignore_patterns: &[String], verbose: bool) -> ScanResult {
    let mut patterns: Vec<Pattern> = Vec::new();
    for p in ignore_patterns {
        match Pattern::new(p) {
            Ok(pattern) => patterns.push(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
            }
        }
    }

    let mut files = Vec::new();
    let mut skipped_count = 0;

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };

        if !entry.file_type().is_file() || !is_properties_file(entry.path()) {
            continue;
        }

        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        if patterns.iter().any(|p| p.matches_path(relative)) {
            continue;
        }

        files.push(entry.into_path());
    }

    files.sort();
    ScanResult {
        files,
        skipped_count,
    }
}
