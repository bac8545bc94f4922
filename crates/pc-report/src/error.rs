//! Error types for format parsing and report generation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or parsing a format file.
#[derive(Error, Debug)]
pub enum FormatError {
    /// I/O error with path context
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Line without a `Name:: content` separator
    #[error("format line {line}: missing '::' separator: '{content}'")]
    MalformedLine { line: usize, content: String },

    /// `%`-directive other than `%summary`
    #[error("format line {line}: unknown directive '%{name}'")]
    UnknownDirective { line: usize, name: String },

    /// Second `%summary::` section
    #[error("format line {line}: duplicate %summary section")]
    DuplicateSummary { line: usize },

    /// Template ended without a `%summary::` section
    #[error("format template has no %summary section")]
    MissingSummary,

    /// Description section with an empty element list
    #[error("format line {line}: section '{header}' lists no elements")]
    EmptySection { line: usize, header: String },
}

/// Result type alias for formatter operations.
pub type Result<T> = std::result::Result<T, FormatError>;
