//! Error types for journal delivery.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while delivering a journal entry.
#[derive(Error, Debug)]
pub enum JournalError {
    /// Journal socket missing or refusing connections
    #[error("journal socket '{}' unavailable: {source}", .path.display())]
    SocketUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Datagram send failed
    #[error("failed to send journal entry: {0}")]
    Send(#[from] std::io::Error),

    /// Sealed-memfd fallback for oversized entries failed
    #[error("oversized entry fallback failed: {0}")]
    OversizeFallback(#[source] nix::Error),
}

/// Result type alias for journal operations.
pub type Result<T> = std::result::Result<T, JournalError>;
