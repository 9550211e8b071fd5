//! Report formatting and printing utilities.
//!
//! Progress goes to stdout, every diagnostic goes to stderr. Separate from
//! the core so the generator can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use crate::core::batch::BatchSummary;
use crate::issues::{Issue, Report, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub const USAGE: &str =
    "Usage: i18nsync <ROOT_DIR> <ROOT_DIR/com/mypackage/Foo.properties> [.../Bar.properties ...]";

/// Print a "Generating X..." progress line to stdout.
pub fn print_progress(qualified_name: &str) {
    print_progress_to(qualified_name, &mut io::stdout().lock());
}

pub fn print_progress_to<W: Write>(qualified_name: &str, writer: &mut W) {
    let _ = writeln!(writer, "Generating {}...", qualified_name);
}

/// Print an issue to stderr, unless it is only shown in verbose mode.
pub fn print_issue(issue: &Issue, verbose: bool) {
    if issue.is_verbose_only() && !verbose {
        return;
    }
    print_issue_to(issue, &mut io::stderr().lock());
}

/// Print a single-line diagnostic to a custom writer.
pub fn print_issue_to<W: Write>(issue: &Issue, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}  {}",
        severity_label(issue.report_severity()),
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );
}

fn severity_label(severity: Severity) -> colored::ColoredString {
    match severity {
        Severity::Error => "error:".bold().red(),
        Severity::Warning => "warning:".bold().yellow(),
        Severity::Info => "info:".bold().cyan(),
    }
}

pub fn print_usage() {
    print_usage_to(&mut io::stderr().lock());
}

pub fn print_usage_to<W: Write>(writer: &mut W) {
    let _ = writeln!(writer, "{}", USAGE);
}

/// Print a fatal error that stops the run to stderr.
pub fn print_fatal(message: &str) {
    print_fatal_to(message, &mut io::stderr().lock());
}

pub fn print_fatal_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", "error:".bold().red(), message);
}

/// Print a verbose note to stderr.
pub fn print_note(message: &str) {
    let _ = writeln!(io::stderr().lock(), "{} {}", "note:".bold(), message);
}

/// Print the batch summary: success to stdout, failures to stderr.
pub fn print_summary(summary: &BatchSummary) {
    if summary.is_success() {
        print_summary_to(summary, &mut io::stdout().lock());
    } else {
        print_summary_to(summary, &mut io::stderr().lock());
    }
}

pub fn print_summary_to<W: Write>(summary: &BatchSummary, writer: &mut W) {
    let mut counts = format!(
        "{} generated, {} up to date, {} ignored",
        summary.generated_count, summary.up_to_date_count, summary.ignored_count
    );
    if summary.collision_count > 0 {
        counts.push_str(&format!(
            ", {} name {}",
            summary.collision_count,
            plural(summary.collision_count, "collision", "collisions")
        ));
    }

    if summary.is_success() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Processed {} {}: {}",
                summary.total(),
                plural(summary.total(), "file", "files"),
                counts
            )
            .green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "{} of {} {} failed ({})",
                summary.error_count,
                summary.total(),
                plural(summary.total(), "file", "files"),
                counts
            )
            .red()
        );
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
