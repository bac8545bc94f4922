//! Fixed field sets mirrored into journal entries.

use pc_problem::data::elements;

/// Elements mirrored in every mode when present.
pub const DEFAULT_FIELDS: &[&str] = &[
    elements::EXECUTABLE,
    elements::PID,
    elements::EXCEPTION_TYPE,
];

/// Additional elements mirrored in `ESSENTIAL` mode.
pub const ESSENTIAL_FIELDS: &[&str] = &[
    elements::REASON,
    elements::CRASH_FUNCTION,
    elements::CMDLINE,
    elements::COMPONENT,
    elements::PKG_NAME,
    elements::PKG_VERSION,
    elements::PKG_RELEASE,
    elements::PKG_FINGERPRINT,
    elements::REPORTED_TO,
    elements::TYPE,
    elements::UID,
];
