//! Journal entry assembly.

use tracing::debug;

use pc_problem::ProblemData;
use pc_report::Report;

use crate::fields::{DEFAULT_FIELDS, ESSENTIAL_FIELDS};
use crate::mode::DumpMode;
use crate::record::RecordBuffer;

/// Catalog message id used when the caller supplies none. Identifies a
/// generic problem report to sinks that classify entries by id; the value
/// itself is an opaque 32-character token.
pub const DEFAULT_MESSAGE_ID: &str = "1909f1302a5240c895d7c05566100dce";

/// Prefix for mirrored problem elements.
const PROBLEM_FIELD_PREFIX: &str = "PROBLEM_";

/// Severity of every entry this tool emits (syslog LOG_CRIT).
const PRIORITY_CRIT: &str = "2";

/// Builds the ordered record list for one journal entry.
///
/// The first four records are always `MESSAGE`, `MESSAGE_ID`, `PRIORITY`,
/// and `PROBLEM_REPORT`; the dump mode then selects which elements follow
/// as `PROBLEM_<NAME>` records. Assembly is total: absent elements simply
/// produce fewer records.
pub struct EntryAssembler<'a> {
    data: &'a ProblemData,
    report: &'a Report,
    message_id: Option<&'a str>,
    mode: DumpMode,
}

impl<'a> EntryAssembler<'a> {
    pub fn new(data: &'a ProblemData, report: &'a Report) -> Self {
        Self {
            data,
            report,
            message_id: None,
            mode: DumpMode::default(),
        }
    }

    /// Overrides the catalog message id.
    pub fn with_message_id(mut self, message_id: &'a str) -> Self {
        self.message_id = Some(message_id);
        self
    }

    /// Selects which elements are mirrored behind the mandatory records.
    pub fn with_dump_mode(mut self, mode: DumpMode) -> Self {
        self.mode = mode;
        self
    }

    /// Produces the entry's records.
    pub fn assemble(&self) -> RecordBuffer {
        let mut buffer = RecordBuffer::new();

        buffer.append("MESSAGE", &self.report.summary);
        buffer.append("MESSAGE_ID", self.message_id.unwrap_or(DEFAULT_MESSAGE_ID));
        buffer.append("PRIORITY", PRIORITY_CRIT);
        match &self.report.description {
            // Leading newline so the sink renders the body on its own line.
            Some(description) => {
                let mut body = String::with_capacity(description.len() + 1);
                body.push('\n');
                body.push_str(description);
                buffer.append("PROBLEM_REPORT", &body);
            }
            None => buffer.append("PROBLEM_REPORT", ""),
        }

        match self.mode {
            DumpMode::None => self.mirror_named(&mut buffer, DEFAULT_FIELDS),
            DumpMode::Essential => {
                self.mirror_named(&mut buffer, DEFAULT_FIELDS);
                self.mirror_named(&mut buffer, ESSENTIAL_FIELDS);
            }
            DumpMode::Full => self.mirror_all(&mut buffer),
        }

        debug!(records = buffer.len(), mode = %self.mode, "assembled journal entry");
        buffer
    }

    fn mirror_named(&self, buffer: &mut RecordBuffer, names: &[&str]) {
        for name in names {
            if let Some(value) = self.data.content(name) {
                buffer.append_prefixed(PROBLEM_FIELD_PREFIX, name, value);
            }
        }
    }

    /// Mirrors every textual element in store order. Elements named like a
    /// mandatory record are mirrored anyway; consumers rely on seeing the
    /// store verbatim under the `PROBLEM_` prefix.
    fn mirror_all(&self, buffer: &mut RecordBuffer) {
        for (name, item) in self.data.iter() {
            if let Some(value) = item.as_text() {
                buffer.append_prefixed(PROBLEM_FIELD_PREFIX, name, value);
            }
        }
    }
}
