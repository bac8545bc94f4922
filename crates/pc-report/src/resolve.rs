//! Format-file resolution and path discovery.
//!
//! Resolution order: CLI argument → environment variable → XDG path →
//! system path → built-in template.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::template::FormatTemplate;

/// Where the format template was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormatSource {
    /// Explicitly provided via CLI argument.
    CliArgument,

    /// Set via environment variable.
    Environment,

    /// Found in XDG config directory.
    XdgConfig,

    /// Found in /etc/problem-courier/.
    SystemConfig,

    /// Using the built-in template.
    #[default]
    BuiltinDefault,
}

impl std::fmt::Display for FormatSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatSource::CliArgument => write!(f, "CLI argument"),
            FormatSource::Environment => write!(f, "environment variable"),
            FormatSource::XdgConfig => write!(f, "XDG config"),
            FormatSource::SystemConfig => write!(f, "system config"),
            FormatSource::BuiltinDefault => write!(f, "builtin template"),
        }
    }
}

/// Environment variable holding an explicit format-file path.
pub const ENV_FORMAT_PATH: &str = "PROBLEM_COURIER_FORMAT";

/// Standard format file name.
const FORMAT_FILENAME: &str = "journal.conf";

/// Application name for XDG directories.
const APP_NAME: &str = "problem-courier";

/// Resolve the format-file path using the standard resolution order.
///
/// 1. Explicit CLI path (used unconditionally; a bad path fails at load)
/// 2. PROBLEM_COURIER_FORMAT environment variable
/// 3. XDG config directory (~/.config/problem-courier/journal.conf)
/// 4. System config (/etc/problem-courier/journal.conf)
/// 5. Built-in template (None)
pub fn resolve_format_file(cli_path: Option<&Path>) -> (Option<PathBuf>, FormatSource) {
    // 1. CLI argument
    if let Some(path) = cli_path {
        return (Some(path.to_path_buf()), FormatSource::CliArgument);
    }

    // 2. Environment variable
    if let Ok(env_path) = std::env::var(ENV_FORMAT_PATH) {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return (Some(path), FormatSource::Environment);
        }
    }

    // 3. XDG config directory
    if let Some(xdg_config) = dirs::config_dir() {
        let path = xdg_config.join(APP_NAME).join(FORMAT_FILENAME);
        if path.exists() {
            return (Some(path), FormatSource::XdgConfig);
        }
    }

    // 4. System config
    let system_path = PathBuf::from("/etc").join(APP_NAME).join(FORMAT_FILENAME);
    if system_path.exists() {
        return (Some(system_path), FormatSource::SystemConfig);
    }

    // 5. Built-in template (None)
    (None, FormatSource::BuiltinDefault)
}

/// Resolves and loads the format template in one step.
pub fn load_resolved(cli_path: Option<&Path>) -> Result<(FormatTemplate, FormatSource)> {
    let (path, source) = resolve_format_file(cli_path);
    let template = match &path {
        Some(path) => FormatTemplate::load(path)?,
        None => FormatTemplate::default(),
    };
    debug!(source = %source, path = ?path, "resolved format template");
    Ok((template, source))
}
