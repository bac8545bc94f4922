//! Template-driven report formatter.
//!
//! Turns a [`pc_problem::ProblemData`] store into a [`Report`]: a one-line
//! summary plus an optional free-text description, driven by a small
//! line-oriented format file.
//!
//! # Format files
//!
//! A format file is a sequence of `Name:: content` lines; blank lines and
//! `#` comments are ignored:
//!
//! ```text
//! %summary:: %reason%
//!
//! # description sections, rendered in file order
//! Process:: executable,cmdline,pid
//! Backtrace:: %short_backtrace
//! Comment:: %comment
//! ```
//!
//! `%summary::` sets the summary template (`%element%` placeholders are
//! replaced by element content). Every other line is a description section:
//! `elem` renders a labeled value, `%elem` renders the bare value, and
//! `%short_backtrace` renders a truncated view of the `backtrace` element.
//! Sections whose elements are all absent are omitted.

pub mod error;
pub mod render;
pub mod resolve;
pub mod template;

pub use error::{FormatError, Result};
pub use render::{FormatSettings, Report};
pub use resolve::{load_resolved, resolve_format_file, FormatSource};
pub use template::FormatTemplate;
