use std::{collections::HashSet, path::PathBuf};

use anyhow::Result;

use super::{args::Arguments, exit_status::ExitStatus, report};
use crate::{
    config::{Config, ConfigLoadResult, load_config},
    core::{
        batch::{run_batch, validate_root},
        file_scanner::scan_properties_files,
        generator::{Generator, Outcome},
    },
    issues::Issue,
};

/// Run one generation batch.
///
/// # Returns
/// - `Ok(ExitStatus::Success)` when every input was generated or skipped
/// - `Ok(ExitStatus::Failure)` for bad usage, an invalid root, or any failed file
/// - `Err` if the configuration file cannot be loaded
pub fn run(args: Arguments) -> Result<ExitStatus> {
    if args.is_missing_inputs() {
        report::print_usage();
        return Ok(ExitStatus::Failure);
    }

    let source_root = match validate_root(&args.root_dir) {
        Ok(root) => root,
        Err(err) => {
            report::print_fatal(&err.to_string());
            return Ok(ExitStatus::Failure);
        }
    };

    let ConfigLoadResult { mut config, path } = load_config(&source_root)?;
    if args.verbose {
        match &path {
            Some(path) => report::print_note(&format!("Using config file: {}", path.display())),
            None => report::print_note("No config file found, using defaults"),
        }
    }
    if let Some(key_order) = args.key_order {
        config.key_order = key_order;
    }

    let generator = Generator::new(&source_root, Box::new(config.dialect()))?
        .with_key_order(config.key_order);
    let files = collect_inputs(&args, &config);

    let verbose = args.verbose;
    let summary = run_batch(&generator, &files, |file| {
        if let Ok(Outcome::Generated(generated)) = &file.result {
            report::print_progress(&generated.qualified_name);
        }
        for issue in Issue::from_file_result(file) {
            report::print_issue(&issue, verbose);
        }
    });

    if verbose {
        report::print_summary(&summary);
    }

    Ok(if summary.is_success() {
        ExitStatus::Success
    } else {
        ExitStatus::Failure
    })
}

/// Explicit files in command-line order, followed by scanned files not
/// already listed.
fn collect_inputs(args: &Arguments, config: &Config) -> Vec<PathBuf> {
    let mut files = args.files.clone();
    if !args.scan {
        return files;
    }

    let scan = scan_properties_files(&args.root_dir, &config.ignores, args.verbose);
    if args.verbose {
        report::print_note(&format!(
            "Found {} properties file(s) under {}",
            scan.files.len(),
            args.root_dir.display()
        ));
        if scan.skipped_count > 0 {
            report::print_note(&format!(
                "{} entries could not be read while scanning",
                scan.skipped_count
            ));
        }
    }

    let mut seen: HashSet<PathBuf> = files.iter().map(|f| absolute_or_self(f)).collect();
    for file in scan.files {
        if seen.insert(absolute_or_self(&file)) {
            files.push(file);
        }
    }
    files
}

fn absolute_or_self(path: &std::path::Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
