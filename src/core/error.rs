//! Error types for interface generation using thiserror.

use std::{
    io,
    path::{Path, PathBuf},
};

/// Failure while generating an interface.
///
/// `InvalidRoot` aborts a whole batch; every other variant is scoped to a
/// single input file and never stops the remaining files from being processed.
#[derive(thiserror::Error, Debug)]
pub enum GenerationError {
    /// The declared source root is missing or not a directory.
    #[error("Invalid root directory: {}", .path.display())]
    InvalidRoot { path: PathBuf },

    /// Reading the input or writing the output failed.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The properties file contains a malformed escape sequence.
    #[error("{}:{line}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },
}

impl GenerationError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Path of the file (or root) the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::InvalidRoot { path } | Self::Io { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}

pub type GenerationResult<T> = Result<T, GenerationError>;
