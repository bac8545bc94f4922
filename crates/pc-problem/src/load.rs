//! Problem directory loading and content classification.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::data::{ProblemData, ProblemItem};
use crate::error::{ProblemError, Result};

/// Largest element still classified as text (1 MiB). Anything bigger is
/// treated as binary regardless of content.
pub const MAX_TEXT_SIZE: usize = 1024 * 1024;

/// Classifies raw element content.
///
/// Content with a NUL byte, invalid UTF-8, or more than [`MAX_TEXT_SIZE`]
/// bytes is binary. Text content has exactly one trailing newline stripped
/// (element files conventionally store one value plus a final newline).
pub fn classify(bytes: Vec<u8>) -> ProblemItem {
    if bytes.len() > MAX_TEXT_SIZE || bytes.contains(&0) {
        return ProblemItem::Binary(bytes);
    }
    match String::from_utf8(bytes) {
        Ok(mut text) => {
            if text.ends_with('\n') {
                text.pop();
            }
            ProblemItem::Text(text)
        }
        Err(err) => ProblemItem::Binary(err.into_bytes()),
    }
}

impl ProblemData {
    /// Loads a problem directory into memory.
    ///
    /// Every regular file directly under `dir` becomes one element named
    /// after the file. Hidden files and subdirectories are skipped. A
    /// directory with no elements is an error: it cannot describe a problem.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(ProblemError::NotADirectory(dir.to_path_buf()));
        }

        let io_err = |source| ProblemError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut data = ProblemData::new();
        for entry in fs::read_dir(dir).map_err(io_err)? {
            let entry = entry.map_err(io_err)?;
            let path = entry.path();

            let Ok(name) = entry.file_name().into_string() else {
                warn!(path = %path.display(), "skipping element with non-UTF-8 name");
                continue;
            };
            if name.starts_with('.') {
                continue;
            }
            // Follows symlinks; collectors commonly link large elements.
            let metadata = fs::metadata(&path).map_err(|source| ProblemError::Io {
                path: path.clone(),
                source,
            })?;
            if !metadata.is_file() {
                continue;
            }

            let bytes = fs::read(&path).map_err(|source| ProblemError::Io {
                path: path.clone(),
                source,
            })?;
            data.insert(name, classify(bytes));
        }

        if data.is_empty() {
            return Err(ProblemError::EmptyDirectory(dir.to_path_buf()));
        }
        debug!(dir = %dir.display(), elements = data.len(), "loaded problem directory");
        Ok(data)
    }
}
