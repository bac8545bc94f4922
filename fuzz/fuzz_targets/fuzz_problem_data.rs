//! Fuzz target for serialized problem data parsing.
//!
//! Tests that JSON problem data deserialization handles arbitrary input
//! without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pc_problem::ProblemData;

fuzz_target!(|data: &[u8]| {
    // Try to parse as JSON - should never panic, only return an error
    let _ = serde_json::from_slice::<ProblemData>(data);
});
