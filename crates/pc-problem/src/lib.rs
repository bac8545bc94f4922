//! Problem-data store and directory loader.
//!
//! A problem directory is the on-disk form of one crash/problem report: every
//! regular file directly under it is one element, the file name is the element
//! name, the file content is the element value. This crate loads such a
//! directory into a [`ProblemData`] map whose items are classified text or
//! binary, and exposes the well-known element names the rest of the courier
//! reads.
//!
//! Loading is the only I/O in this crate; everything downstream works on the
//! in-memory store.

pub mod data;
pub mod error;
pub mod load;

pub use data::{ProblemData, ProblemItem};
pub use error::{ProblemError, Result};
pub use load::classify;
