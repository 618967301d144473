//! Aggregate table: key -> `StatRecord`.
//!
//! The table has two phases. While reading it is folded into; `into_report`
//! consumes it and yields the key-sorted `Report`.

use super::stats::StatRecord;
use crate::output::Report;
use crate::parser::scan_measurements;
use crate::utils::error::AggregateError;
use log::{debug, info};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Mapping from key to its running statistics
///
/// **Public** - owned exclusively by the single reading pass
#[derive(Debug, Clone, Default)]
pub struct AggregateTable {
    records: HashMap<String, StatRecord>,
}

impl AggregateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one observation for `key`
    ///
    /// The key is only allocated the first time it is seen.
    pub fn fold(&mut self, key: &str, value: f64) {
        if let Some(record) = self.records.get_mut(key) {
            record.fold(value);
        } else {
            self.records.insert(key.to_string(), StatRecord::new(value));
        }
    }

    /// Record for `key`, if any observation was folded for it
    pub fn get(&self, key: &str) -> Option<&StatRecord> {
        self.records.get(key)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total observations across all keys
    pub fn observations(&self) -> u64 {
        self.records.values().map(StatRecord::count).sum()
    }

    /// Finish reading and produce the key-sorted report
    pub fn into_report(self) -> Report {
        let mut entries: Vec<(String, StatRecord)> = self.records.into_iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        Report::new(entries)
    }
}

/// Aggregate every measurement from a buffered reader
///
/// **Public** - main entry point for streaming aggregation
///
/// # Errors
/// * `AggregateError::Io` - the reader failed
/// * `AggregateError::Parse` - a malformed line; nothing is returned
pub fn aggregate_reader<R: BufRead>(reader: R) -> Result<AggregateTable, AggregateError> {
    let mut table = AggregateTable::new();

    let lines = scan_measurements(reader, |key, value| {
        table.fold(key, value);
        Ok::<(), AggregateError>(())
    })?;

    debug!("Aggregated {} lines into {} keys", lines, table.len());

    Ok(table)
}

/// Aggregate a measurements file
///
/// **Public** - opens `path` and streams it through `aggregate_reader`
///
/// The file handle is dropped on every return path.
pub fn aggregate_file(path: impl AsRef<Path>) -> Result<AggregateTable, AggregateError> {
    let path = path.as_ref();
    info!("Reading measurements from: {}", path.display());

    let file = File::open(path)?;
    aggregate_reader(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_fold_creates_then_updates() {
        let mut table = AggregateTable::new();
        table.fold("A", 1.0);
        assert_eq!(table.get("A").unwrap().count(), 1);

        table.fold("A", 3.0);
        let record = table.get("A").unwrap();
        assert_eq!(record.count(), 2);
        assert_eq!(record.mean(), 2.0);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_unknown_key() {
        let table = AggregateTable::new();
        assert!(table.get("missing").is_none());
        assert!(table.is_empty());
    }

    #[test]
    fn test_observations() {
        let mut table = AggregateTable::new();
        table.fold("A", 1.0);
        table.fold("B", 1.0);
        table.fold("A", 1.0);
        assert_eq!(table.observations(), 3);
    }

    #[test]
    fn test_into_report_sorted() {
        let mut table = AggregateTable::new();
        for key in ["b", "C", "a", "B"] {
            table.fold(key, 0.0);
        }

        let report = table.into_report();
        let keys: Vec<&str> = report
            .entries()
            .iter()
            .map(|(k, _)| k.as_str())
            .collect();

        // Byte-wise order: uppercase before lowercase
        assert_eq!(keys, vec!["B", "C", "a", "b"]);
    }

    #[test]
    fn test_aggregate_reader_aborts_on_bad_line() {
        let input = Cursor::new("A;1.0\nA;oops\n");
        assert!(matches!(
            aggregate_reader(input),
            Err(AggregateError::Parse(_))
        ));
    }

    #[test]
    fn test_aggregate_missing_file() {
        let err = aggregate_file("/definitely/not/here/measurements.txt").unwrap_err();
        assert!(matches!(err, AggregateError::Io(_)));
    }
}
