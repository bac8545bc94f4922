//! Journal-specific adjustments applied before rendering.

use tracing::debug;

use pc_problem::data::elements;
use pc_problem::ProblemData;
use pc_report::FormatSettings;

/// Frame budget for journal-bound backtraces.
const SHORT_BACKTRACE_FRAMES: usize = 5;

/// Placeholder when the crash function is unknown.
const UNKNOWN_FUNCTION: &str = "??";

/// Formatter settings for journal-bound reports: the backtrace is always
/// truncated, whatever its size.
pub fn journal_settings() -> FormatSettings {
    FormatSettings {
        max_frames: SHORT_BACKTRACE_FRAMES,
        full_text_limit: 0,
    }
}

/// Reshapes problem data the way journal consumers expect it: `executable`
/// carries only the binary name, and `crash_function` is always present.
pub fn adjust_for_journal(data: &mut ProblemData) {
    let basename = data
        .content(elements::EXECUTABLE)
        .and_then(|exe| exe.rsplit_once('/'))
        .map(|(_, base)| base.to_string());
    if let Some(basename) = basename {
        debug!(executable = %basename, "trimmed executable to basename");
        data.insert_text(elements::EXECUTABLE, basename);
    }

    if !data.contains(elements::CRASH_FUNCTION) {
        data.insert_text(elements::CRASH_FUNCTION, UNKNOWN_FUNCTION);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_executable_trimmed_to_basename() {
        let mut data = ProblemData::new();
        data.insert_text(elements::EXECUTABLE, "/usr/bin/will_segfault");
        adjust_for_journal(&mut data);
        assert_eq!(data.content(elements::EXECUTABLE), Some("will_segfault"));
    }

    #[test]
    fn test_executable_without_slash_kept() {
        let mut data = ProblemData::new();
        data.insert_text(elements::EXECUTABLE, "will_segfault");
        adjust_for_journal(&mut data);
        assert_eq!(data.content(elements::EXECUTABLE), Some("will_segfault"));
    }

    #[test]
    fn test_missing_executable_tolerated() {
        let mut data = ProblemData::new();
        adjust_for_journal(&mut data);
        assert!(!data.contains(elements::EXECUTABLE));
    }

    #[test]
    fn test_crash_function_defaulted_only_when_absent() {
        let mut data = ProblemData::new();
        adjust_for_journal(&mut data);
        assert_eq!(data.content(elements::CRASH_FUNCTION), Some("??"));

        let mut data = ProblemData::new();
        data.insert_text(elements::CRASH_FUNCTION, "do_crash");
        adjust_for_journal(&mut data);
        assert_eq!(data.content(elements::CRASH_FUNCTION), Some("do_crash"));
    }

    #[test]
    fn test_journal_settings_force_short_backtrace() {
        let settings = journal_settings();
        assert_eq!(settings.max_frames, 5);
        assert_eq!(settings.full_text_limit, 0);
    }
}
