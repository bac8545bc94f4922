//! Growable, ordered buffer of journal records.

use serde::Serialize;

/// Starting slot count of a fresh buffer.
const INITIAL_CAPACITY: usize = 2;

/// Slots added each time the buffer fills. Typical entries stay under ~20
/// records, so a fixed step beats doubling here.
const GROWTH_STEP: usize = 5;

/// One `KEY=value` record destined for the journal.
///
/// Only [`RecordBuffer`] constructs records, so the key portion is always
/// uppercase and an `=` separator is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record(String);

impl Record {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Key portion, before the first `=`.
    pub fn key(&self) -> &str {
        self.0.split_once('=').map_or(self.0.as_str(), |(k, _)| k)
    }

    /// Value portion, after the first `=`.
    pub fn value(&self) -> &str {
        self.0.split_once('=').map_or("", |(_, v)| v)
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered list of records for one journal entry.
///
/// Starts with room for two records and grows by a fixed five-slot step,
/// preserving insertion order. The buffer owns its records for its whole
/// lifetime; dropping it frees them all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordBuffer {
    records: Vec<Record>,
}

impl Default for RecordBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordBuffer {
    pub fn new() -> Self {
        Self {
            records: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Appends the record `PREFIXKEY=value` with the prefix+key portion
    /// uppercased (ASCII) and the value untouched.
    ///
    /// Neither `prefix` nor `key` may contain `=`; journal field names
    /// cannot carry the separator.
    pub fn append_prefixed(&mut self, prefix: &str, key: &str, value: &str) {
        debug_assert!(!prefix.contains('='), "record prefix must not contain '='");
        debug_assert!(!key.contains('='), "record key must not contain '='");

        if self.records.len() == self.records.capacity() {
            self.records.reserve_exact(GROWTH_STEP);
        }

        let mut record = String::with_capacity(prefix.len() + key.len() + 1 + value.len());
        record.push_str(prefix);
        record.push_str(key);
        record.make_ascii_uppercase();
        record.push('=');
        record.push_str(value);
        self.records.push(Record(record));
    }

    /// Appends `KEY=value` with no prefix.
    pub fn append(&mut self, key: &str, value: &str) {
        self.append_prefixed("", key, value);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Allocated slot count; exposed so the growth policy stays observable.
    pub fn capacity(&self) -> usize {
        self.records.capacity()
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a RecordBuffer {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
