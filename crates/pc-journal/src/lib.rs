//! Journal record assembly and native-protocol delivery.
//!
//! This crate turns a problem-data store plus a rendered report into the
//! ordered set of `KEY=value` records that make up one structured journal
//! entry, then delivers the set atomically over journald's native datagram
//! socket.
//!
//! # Record layout
//!
//! Every entry starts with the four mandatory records `MESSAGE`,
//! `MESSAGE_ID`, `PRIORITY`, and `PROBLEM_REPORT`, in that order. The
//! selected [`DumpMode`] then decides which problem elements are mirrored
//! behind them as `PROBLEM_<NAME>` records.
//!
//! # Example
//!
//! ```no_run
//! use pc_journal::{DumpMode, EntryAssembler, JournalSink, JournalSocket};
//! use pc_problem::ProblemData;
//! use pc_report::{FormatSettings, FormatTemplate};
//!
//! let mut data = ProblemData::new();
//! data.insert_text("reason", "will_segfault killed by SIGSEGV");
//!
//! let report = FormatTemplate::default().render(&data, &FormatSettings::default());
//! let buffer = EntryAssembler::new(&data, &report)
//!     .with_dump_mode(DumpMode::Essential)
//!     .assemble();
//!
//! JournalSocket::system().send(&buffer).unwrap();
//! ```

pub mod assemble;
pub mod error;
pub mod fields;
pub mod mode;
pub mod record;
pub mod send;

pub use assemble::{EntryAssembler, DEFAULT_MESSAGE_ID};
pub use error::{JournalError, Result};
pub use fields::{DEFAULT_FIELDS, ESSENTIAL_FIELDS};
pub use mode::DumpMode;
pub use record::{Record, RecordBuffer};
pub use send::{serialize_entry, JournalSink, JournalSocket, JOURNAL_SOCKET_PATH};
