//! Fuzz target for format file parsing.
//!
//! Tests that `FormatTemplate::parse` handles arbitrary input without
//! panicking. Format files are user-supplied, so malformed content must
//! only ever produce an error.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pc_report::FormatTemplate;

fuzz_target!(|data: &str| {
    // The parser should never panic, only return an error
    let _ = FormatTemplate::parse(data);
});
