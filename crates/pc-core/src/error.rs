//! Top-level error type for the courier binary.

use thiserror::Error;

/// Any failure the reporting pipeline can hit.
#[derive(Error, Debug)]
pub enum CourierError {
    /// Problem directory could not be loaded
    #[error("loading problem data failed: {0}")]
    Problem(#[from] pc_problem::ProblemError),

    /// Format file could not be loaded or parsed
    #[error("formatting report failed: {0}")]
    Format(#[from] pc_report::FormatError),

    /// Journal entry could not be delivered
    #[error("journal delivery failed: {0}")]
    Journal(#[from] pc_journal::JournalError),
}
