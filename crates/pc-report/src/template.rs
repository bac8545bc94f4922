//! Format-file parsing.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{FormatError, Result};

/// Compiled-in fallback used when no format file is found anywhere.
pub const BUILTIN_TEMPLATE: &str = "%summary:: %reason%\n";

/// One item of a description section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SectionItem {
    /// `elem` renders `elem: value`.
    Labeled(String),
    /// `%elem` renders the raw value.
    Bare(String),
    /// `%short_backtrace` renders a truncated `backtrace` element.
    ShortBacktrace,
}

/// One `Header:: items` description section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Section {
    pub(crate) header: String,
    pub(crate) items: Vec<SectionItem>,
}

/// A parsed format file: the summary template plus description sections in
/// file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTemplate {
    pub(crate) summary: String,
    pub(crate) sections: Vec<Section>,
}

impl Default for FormatTemplate {
    /// The parsed form of [`BUILTIN_TEMPLATE`].
    fn default() -> Self {
        Self {
            summary: "%reason%".to_string(),
            sections: Vec::new(),
        }
    }
}

impl FormatTemplate {
    /// Parses format-file content.
    ///
    /// Exactly one `%summary::` section is required. Blank lines, `#`
    /// comments, and empty items inside a section list are ignored.
    pub fn parse(text: &str) -> Result<Self> {
        let mut summary: Option<String> = None;
        let mut sections = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let Some((name, content)) = trimmed.split_once("::") else {
                return Err(FormatError::MalformedLine {
                    line,
                    content: trimmed.to_string(),
                });
            };
            let name = name.trim();
            let content = content.trim();

            if let Some(directive) = name.strip_prefix('%') {
                if directive != "summary" {
                    return Err(FormatError::UnknownDirective {
                        line,
                        name: directive.to_string(),
                    });
                }
                if summary.is_some() {
                    return Err(FormatError::DuplicateSummary { line });
                }
                summary = Some(content.to_string());
                continue;
            }

            if name.is_empty() {
                return Err(FormatError::MalformedLine {
                    line,
                    content: trimmed.to_string(),
                });
            }

            let items: Vec<SectionItem> = content
                .split(',')
                .map(str::trim)
                .filter_map(parse_item)
                .collect();
            if items.is_empty() {
                return Err(FormatError::EmptySection {
                    line,
                    header: name.to_string(),
                });
            }
            sections.push(Section {
                header: name.to_string(),
                items,
            });
        }

        match summary {
            Some(summary) => Ok(Self { summary, sections }),
            None => Err(FormatError::MissingSummary),
        }
    }

    /// Loads and parses a format file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| FormatError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let template = Self::parse(&text)?;
        debug!(
            path = %path.display(),
            sections = template.sections.len(),
            "loaded format template"
        );
        Ok(template)
    }
}

fn parse_item(item: &str) -> Option<SectionItem> {
    match item.strip_prefix('%') {
        Some("") => None,
        Some("short_backtrace") => Some(SectionItem::ShortBacktrace),
        Some(name) => Some(SectionItem::Bare(name.to_string())),
        None if item.is_empty() => None,
        None => Some(SectionItem::Labeled(item.to_string())),
    }
}
