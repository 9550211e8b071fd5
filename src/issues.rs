//! Diagnostics produced while generating interfaces.
//!
//! Every skip, warning and per-file failure becomes an [`Issue`]. Issues are
//! self-contained so the CLI reporter can render them without going back to
//! the generator.

use std::path::Path;

use enum_dispatch::enum_dispatch;

use crate::core::{
    GenerationError, NameCollision,
    batch::FileResult,
    generator::{Outcome, SkipReason},
};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    NonProperties,
    UpToDate,
    OutsideRoot,
    NameCollision,
    IoError,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::NonProperties => write!(f, "non-properties"),
            Rule::UpToDate => write!(f, "up-to-date"),
            Rule::OutsideRoot => write!(f, "outside-root"),
            Rule::NameCollision => write!(f, "name-collision"),
            Rule::IoError => write!(f, "io-error"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Input whose name does not end in `.properties`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonPropertiesFileIssue {
    pub file_path: String,
}

/// Output already at least as new as its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpToDateIssue {
    pub file_path: String,
    pub output_path: String,
}

/// Output that would land outside the source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutsideRootIssue {
    pub file_path: String,
}

/// Distinct keys generating the same method name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCollisionIssue {
    pub file_path: String,
    pub method_name: String,
    pub keys: Vec<String>,
}

/// Per-file failure: unreadable input, unwritable output, or malformed syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationFailedIssue {
    pub file_path: String,
    pub rule: Rule,
    pub error: String,
}

// ============================================================
// Issue Enum
// ============================================================

#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    NonPropertiesFile(NonPropertiesFileIssue),
    UpToDate(UpToDateIssue),
    OutsideRoot(OutsideRootIssue),
    NameCollision(NameCollisionIssue),
    GenerationFailed(GenerationFailedIssue),
}

impl Issue {
    /// Issues for one processed file, in reporting order.
    pub fn from_file_result(file: &FileResult) -> Vec<Issue> {
        let file_path = display_path(&file.input);

        match &file.result {
            Ok(Outcome::Generated(generated)) => generated
                .collisions
                .iter()
                .map(|collision| name_collision(&file_path, collision))
                .collect(),
            Ok(Outcome::Skipped { reason, output }) => {
                let issue = match reason {
                    SkipReason::NonPropertiesFile => {
                        Issue::NonPropertiesFile(NonPropertiesFileIssue { file_path })
                    }
                    SkipReason::OutsideRoot => Issue::OutsideRoot(OutsideRootIssue { file_path }),
                    SkipReason::UpToDate => Issue::UpToDate(UpToDateIssue {
                        file_path,
                        output_path: output.as_deref().map(display_path).unwrap_or_default(),
                    }),
                };
                vec![issue]
            }
            Err(err) => vec![Issue::GenerationFailed(GenerationFailedIssue {
                file_path,
                rule: rule_for_error(err),
                error: error_cause(err),
            })],
        }
    }

    /// Issues hidden unless running in verbose mode.
    pub fn is_verbose_only(&self) -> bool {
        matches!(self, Issue::UpToDate(_))
    }
}

fn name_collision(file_path: &str, collision: &NameCollision) -> Issue {
    Issue::NameCollision(NameCollisionIssue {
        file_path: file_path.to_string(),
        method_name: collision.method_name.clone(),
        keys: collision.keys.clone(),
    })
}

fn rule_for_error(err: &GenerationError) -> Rule {
    match err {
        GenerationError::Parse { .. } => Rule::ParseError,
        GenerationError::Io { .. } | GenerationError::InvalidRoot { .. } => Rule::IoError,
    }
}

/// Error text without the input path, which the issue already carries.
fn error_cause(err: &GenerationError) -> String {
    match err {
        GenerationError::Io { path, source } => format!("{}: {}", display_path(path), source),
        GenerationError::Parse { line, message, .. } => format!("line {}: {}", line, message),
        GenerationError::InvalidRoot { .. } => err.to_string(),
    }
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Trait for types that can be reported to CLI.
///
/// Uses `enum_dispatch` for zero-cost dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// Single-line message to display.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for NonPropertiesFileIssue {
    fn message(&self) -> String {
        format!("Ignoring non-properties file: {}", self.file_path)
    }

    fn report_severity(&self) -> Severity {
        Severity::Info
    }

    fn report_rule(&self) -> Rule {
        Rule::NonProperties
    }
}

impl Report for UpToDateIssue {
    fn message(&self) -> String {
        format!("Up to date: {}", self.output_path)
    }

    fn report_severity(&self) -> Severity {
        Severity::Info
    }

    fn report_rule(&self) -> Rule {
        Rule::UpToDate
    }
}

impl Report for OutsideRootIssue {
    fn message(&self) -> String {
        format!("Ignoring properties file outside root: {}", self.file_path)
    }

    fn report_severity(&self) -> Severity {
        Severity::Info
    }

    fn report_rule(&self) -> Rule {
        Rule::OutsideRoot
    }
}

impl Report for NameCollisionIssue {
    fn message(&self) -> String {
        let keys: Vec<String> = self.keys.iter().map(|k| format!("'{}'", k)).collect();
        format!(
            "Keys {} in {} all map to method '{}'",
            keys.join(", "),
            self.file_path,
            self.method_name
        )
    }

    fn report_severity(&self) -> Severity {
        Severity::Warning
    }

    fn report_rule(&self) -> Rule {
        Rule::NameCollision
    }
}

impl Report for GenerationFailedIssue {
    fn message(&self) -> String {
        format!("Error processing '{}': {}", self.file_path, self.error)
    }

    fn report_severity(&self) -> Severity {
        Severity::Error
    }

    fn report_rule(&self) -> Rule {
        self.rule
    }
}
