//! Fuzz target for dump mode selector parsing.
//!
//! Tests that `DumpMode::from_str` handles arbitrary input without
//! panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pc_journal::DumpMode;

fuzz_target!(|data: &str| {
    // The selector parser should never panic, only return an error
    let _ = data.parse::<DumpMode>();
});
