//! Report rendering.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use pc_problem::data::elements;
use pc_problem::ProblemData;

use crate::template::{FormatTemplate, Section, SectionItem};

static RE_PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"%([A-Za-z0-9_]+)%").unwrap());

/// Knobs for backtrace truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatSettings {
    /// Frame lines kept when a backtrace is truncated.
    pub max_frames: usize,

    /// Backtraces up to this many bytes render in full; `0` always truncates.
    pub full_text_limit: usize,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            max_frames: 10,
            full_text_limit: 4096,
        }
    }
}

/// A rendered report: one-line summary plus optional description block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub summary: String,
    pub description: Option<String>,
}

impl FormatTemplate {
    /// Renders a report from problem data.
    ///
    /// Missing and binary elements substitute as empty in the summary and
    /// are skipped in description sections; a section with nothing to show
    /// is omitted entirely.
    pub fn render(&self, data: &ProblemData, settings: &FormatSettings) -> Report {
        let summary = substitute_placeholders(&self.summary, data);

        let blocks: Vec<String> = self
            .sections
            .iter()
            .filter_map(|section| render_section(section, data, settings))
            .collect();
        let description = if blocks.is_empty() {
            None
        } else {
            Some(blocks.join("\n\n"))
        };

        debug!(
            summary_len = summary.len(),
            sections = blocks.len(),
            "rendered report"
        );
        Report {
            summary,
            description,
        }
    }
}

fn substitute_placeholders(template: &str, data: &ProblemData) -> String {
    RE_PLACEHOLDER
        .replace_all(template, |caps: &regex::Captures<'_>| {
            data.content(&caps[1]).unwrap_or_default().to_string()
        })
        .into_owned()
}

fn render_section(
    section: &Section,
    data: &ProblemData,
    settings: &FormatSettings,
) -> Option<String> {
    let mut lines: Vec<String> = Vec::new();
    for item in &section.items {
        match item {
            SectionItem::Labeled(name) => {
                let Some(value) = data.content(name) else {
                    continue;
                };
                if value.is_empty() {
                    continue;
                }
                if value.contains('\n') {
                    lines.push(format!("{name}:\n{value}"));
                } else {
                    lines.push(format!("{name}: {value}"));
                }
            }
            SectionItem::Bare(name) => match data.content(name) {
                Some(value) if !value.is_empty() => lines.push(value.to_string()),
                _ => {}
            },
            SectionItem::ShortBacktrace => {
                let Some(backtrace) = data.content(elements::BACKTRACE) else {
                    continue;
                };
                let shortened = short_backtrace(backtrace, settings);
                if !shortened.is_empty() {
                    lines.push(shortened);
                }
            }
        }
    }

    if lines.is_empty() {
        return None;
    }
    let mut block = format!("{}:\n", section.header);
    block.push_str(&lines.join("\n"));
    Some(block)
}

/// Truncates a backtrace per the settings.
///
/// The short form keeps the first `max_frames` frame lines (gdb-style
/// leading `#` after indentation); a backtrace with no frame lines keeps
/// its first `max_frames` lines instead.
fn short_backtrace(backtrace: &str, settings: &FormatSettings) -> String {
    if settings.full_text_limit > 0 && backtrace.len() <= settings.full_text_limit {
        return backtrace.to_string();
    }

    let frames: Vec<&str> = backtrace
        .lines()
        .filter(|line| line.trim_start().starts_with('#'))
        .take(settings.max_frames)
        .collect();
    if !frames.is_empty() {
        return frames.join("\n");
    }
    backtrace
        .lines()
        .take(settings.max_frames)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> ProblemData {
        let mut data = ProblemData::new();
        data.insert_text(elements::REASON, "will_segfault killed by SIGSEGV");
        data.insert_text(elements::EXECUTABLE, "/usr/bin/will_segfault");
        data.insert_text(elements::PID, "4242");
        data.insert_binary("coredump", vec![0x7f, b'E', b'L', b'F']);
        data
    }

    #[test]
    fn test_default_template_renders_reason() {
        let report = FormatTemplate::default().render(&sample_data(), &FormatSettings::default());
        assert_eq!(report.summary, "will_segfault killed by SIGSEGV");
        assert_eq!(report.description, None);
    }

    #[test]
    fn test_summary_substitutes_missing_and_binary_as_empty() {
        let template = FormatTemplate::parse("%summary:: [%executable%|%nope%|%coredump%]").unwrap();
        let report = template.render(&sample_data(), &FormatSettings::default());
        assert_eq!(report.summary, "[/usr/bin/will_segfault||]");
    }

    #[test]
    fn test_labeled_items_single_and_multiline() {
        let mut data = sample_data();
        data.insert_text("maps", "0x1000 r-xp\n0x2000 rw-p");
        let template = FormatTemplate::parse("%summary:: s\nProcess:: pid,maps").unwrap();

        let report = template.render(&data, &FormatSettings::default());
        assert_eq!(
            report.description.as_deref(),
            Some("Process:\npid: 4242\nmaps:\n0x1000 r-xp\n0x2000 rw-p")
        );
    }

    #[test]
    fn test_bare_item_renders_raw_value() {
        let mut data = sample_data();
        data.insert_text(elements::COMMENT, "it crashed again");
        let template = FormatTemplate::parse("%summary:: s\nComment:: %comment").unwrap();

        let report = template.render(&data, &FormatSettings::default());
        assert_eq!(report.description.as_deref(), Some("Comment:\nit crashed again"));
    }

    #[test]
    fn test_section_with_only_absent_elements_is_omitted() {
        let template =
            FormatTemplate::parse("%summary:: s\nPackage:: pkg_name,pkg_version\nProcess:: pid")
                .unwrap();
        let report = template.render(&sample_data(), &FormatSettings::default());
        assert_eq!(report.description.as_deref(), Some("Process:\npid: 4242"));
    }

    #[test]
    fn test_binary_elements_are_skipped() {
        let template = FormatTemplate::parse("%summary:: s\nDump:: coredump").unwrap();
        let report = template.render(&sample_data(), &FormatSettings::default());
        assert_eq!(report.description, None);
    }

    #[test]
    fn test_sections_joined_by_blank_line() {
        let mut data = sample_data();
        data.insert_text(elements::CMDLINE, "/usr/bin/will_segfault --now");
        let template =
            FormatTemplate::parse("%summary:: s\nProcess:: pid\nCommand:: cmdline").unwrap();

        let report = template.render(&data, &FormatSettings::default());
        assert_eq!(
            report.description.as_deref(),
            Some("Process:\npid: 4242\n\nCommand:\ncmdline: /usr/bin/will_segfault --now")
        );
    }

    #[test]
    fn test_short_backtrace_full_when_under_limit() {
        let mut data = sample_data();
        data.insert_text(elements::BACKTRACE, "#0 crash()\n#1 main()");
        let template = FormatTemplate::parse("%summary:: s\nBacktrace:: %short_backtrace").unwrap();

        let report = template.render(&data, &FormatSettings::default());
        assert_eq!(
            report.description.as_deref(),
            Some("Backtrace:\n#0 crash()\n#1 main()")
        );
    }

    #[test]
    fn test_short_backtrace_truncates_to_frame_lines() {
        let backtrace = "Core was generated by `./will_segfault'.\n\
                         #0  0x0000 in crash ()\n\
                         No symbol table info available.\n\
                         #1  0x0001 in f ()\n\
                         #2  0x0002 in g ()\n\
                         #3  0x0003 in main ()";
        let settings = FormatSettings {
            max_frames: 2,
            full_text_limit: 0,
        };
        assert_eq!(
            short_backtrace(backtrace, &settings),
            "#0  0x0000 in crash ()\n#1  0x0001 in f ()"
        );
    }

    #[test]
    fn test_short_backtrace_without_frame_lines_keeps_head() {
        let backtrace = "Traceback (most recent call last):\n  File \"app.py\", line 1\nValueError";
        let settings = FormatSettings {
            max_frames: 2,
            full_text_limit: 0,
        };
        assert_eq!(
            short_backtrace(backtrace, &settings),
            "Traceback (most recent call last):\n  File \"app.py\", line 1"
        );
    }

    #[test]
    fn test_limit_zero_always_truncates() {
        let settings = FormatSettings {
            max_frames: 1,
            full_text_limit: 0,
        };
        assert_eq!(short_backtrace("#0 a\n#1 b", &settings), "#0 a");
    }
}
