//! In-memory problem-data store.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Well-known element names written by problem collectors.
pub mod elements {
    /// Path of the crashed executable.
    pub const EXECUTABLE: &str = "executable";
    /// Process id of the crashed process.
    pub const PID: &str = "pid";
    /// Language/runtime exception type, when the problem is an exception.
    pub const EXCEPTION_TYPE: &str = "exception_type";
    /// One-line human-readable reason.
    pub const REASON: &str = "reason";
    /// Name of the function the crash occurred in.
    pub const CRASH_FUNCTION: &str = "crash_function";
    /// Command line of the crashed process.
    pub const CMDLINE: &str = "cmdline";
    /// Distribution component the executable belongs to.
    pub const COMPONENT: &str = "component";
    /// Package name.
    pub const PKG_NAME: &str = "pkg_name";
    /// Package version.
    pub const PKG_VERSION: &str = "pkg_version";
    /// Package release.
    pub const PKG_RELEASE: &str = "pkg_release";
    /// Package signing fingerprint.
    pub const PKG_FINGERPRINT: &str = "pkg_fingerprint";
    /// Destinations this problem was already reported to.
    pub const REPORTED_TO: &str = "reported_to";
    /// Problem type (CCpp, Python, Kerneloops, ...).
    pub const TYPE: &str = "type";
    /// User id the crashed process ran under.
    pub const UID: &str = "uid";
    /// Full backtrace text.
    pub const BACKTRACE: &str = "backtrace";
    /// Free-text user comment.
    pub const COMMENT: &str = "comment";
}

/// One element of a problem report: content plus its classification.
///
/// Binary items carry raw bytes and are never mirrored into log records;
/// text items are valid UTF-8 with the storage-convention trailing newline
/// already stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum ProblemItem {
    Text(String),
    Binary(Vec<u8>),
}

impl ProblemItem {
    /// Text content, or `None` for binary items.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ProblemItem::Text(text) => Some(text),
            ProblemItem::Binary(_) => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, ProblemItem::Text(_))
    }

    /// Content length in bytes.
    pub fn len(&self) -> usize {
        match self {
            ProblemItem::Text(text) => text.len(),
            ProblemItem::Binary(bytes) => bytes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One problem report's elements, keyed by element name.
///
/// Enumeration order is the sorted element-name order, so consumers that
/// mirror "all elements" produce deterministic output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemData {
    items: BTreeMap<String, ProblemItem>,
}

impl ProblemData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an element, replacing any previous item of that name.
    pub fn insert(&mut self, name: impl Into<String>, item: ProblemItem) {
        self.items.insert(name.into(), item);
    }

    /// Inserts a text element, replacing any previous item of that name.
    pub fn insert_text(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.items
            .insert(name.into(), ProblemItem::Text(content.into()));
    }

    /// Inserts a binary element, replacing any previous item of that name.
    pub fn insert_binary(&mut self, name: impl Into<String>, content: Vec<u8>) {
        self.items.insert(name.into(), ProblemItem::Binary(content));
    }

    pub fn get(&self, name: &str) -> Option<&ProblemItem> {
        self.items.get(name)
    }

    /// Text content of an element, or `None` when absent or binary.
    pub fn content(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ProblemItem::as_text)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    /// Element names in enumeration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    /// Elements with their items, in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProblemItem)> {
        self.items.iter().map(|(name, item)| (name.as_str(), item))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
