//! Error types for problem-data operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a problem directory.
#[derive(Error, Debug)]
pub enum ProblemError {
    /// Path does not exist or is not a directory
    #[error("not a problem directory: '{}'", .0.display())]
    NotADirectory(PathBuf),

    /// I/O error with path context
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Directory exists but holds no elements
    #[error("problem directory '{}' has no elements", .0.display())]
    EmptyDirectory(PathBuf),
}

/// Result type alias for problem-data operations.
pub type Result<T> = std::result::Result<T, ProblemError>;
