//! Fuzz target for element content classification.
//!
//! Tests that `classify` handles arbitrary byte content without panicking.
//! Problem directories are written by crash handlers and can contain
//! anything, including truncated UTF-8 and embedded NUL bytes.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pc_problem::classify;

fuzz_target!(|data: &[u8]| {
    // Classification should never panic, only pick Text or Binary
    let _ = classify(data.to_vec());
});
