//! Text report writer.
//!
//! Writes one `key=count/min/mean/max` line per key, in the order the
//! report holds them (ascending key).

use crate::aggregator::StatRecord;
use crate::utils::error::OutputError;
use log::debug;
use std::fmt;
use std::io::Write;

/// Key-sorted aggregation result
///
/// **Public** - produced by `AggregateTable::into_report`
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    entries: Vec<(String, StatRecord)>,
}

impl Report {
    /// Wrap entries that are already sorted by key
    pub(crate) fn new(entries: Vec<(String, StatRecord)>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, StatRecord)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, record) in &self.entries {
            writeln!(f, "{}", ReportLine { key, record })?;
        }
        Ok(())
    }
}

/// One formatted `key=count/min/mean/max` line
struct ReportLine<'a> {
    key: &'a str,
    record: &'a StatRecord,
}

impl fmt::Display for ReportLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}/{}/{}/{}",
            self.key,
            self.record.count(),
            Value(self.record.min()),
            Value(self.record.mean()),
            Value(self.record.max())
        )
    }
}

/// Shortest round-trip decimal, never in exponent form, always with a
/// decimal point (`1.0`, `10000000000000000.0`, `0.00001`)
struct Value(f64);

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.0.to_string();
        if text.contains('.') {
            f.write_str(&text)
        } else {
            write!(f, "{}.0", text)
        }
    }
}

/// Write the report, one line per key
///
/// **Public** - main entry point for report output
///
/// # Errors
/// * `OutputError::WriteFailed` - the writer failed
pub fn write_report<W: Write>(report: &Report, mut writer: W) -> Result<(), OutputError> {
    write!(writer, "{}", report)?;
    writer.flush()?;

    debug!("Wrote report with {} keys", report.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(values: &[f64]) -> StatRecord {
        let mut r = StatRecord::new(values[0]);
        for v in &values[1..] {
            r.fold(*v);
        }
        r
    }

    #[test]
    fn test_line_format() {
        let report = Report::new(vec![("A".to_string(), record(&[3.0, 1.0, 2.0]))]);
        assert_eq!(report.to_string(), "A=3/1.0/2.0/3.0\n");
    }

    #[test]
    fn test_no_rounding_of_mean() {
        let r = record(&[1.0, 2.0, 2.0]);
        let report = Report::new(vec![("k".to_string(), r)]);

        assert!(report.to_string().starts_with("k=3/1.0/1.666666"));
        assert_eq!(report.to_string(), format!("k=3/1.0/{}/2.0\n", r.mean()));
    }

    #[test]
    fn test_value_never_uses_exponent() {
        assert_eq!(Value(1.0).to_string(), "1.0");
        assert_eq!(Value(-0.5).to_string(), "-0.5");
        assert_eq!(Value(1e16).to_string(), "10000000000000000.0");
        assert_eq!(Value(0.00001).to_string(), "0.00001");
        assert_eq!(Value(-2.5e-7).to_string(), "-0.00000025");
    }

    #[test]
    fn test_write_report_matches_display() {
        let report = Report::new(vec![
            ("X".to_string(), record(&[10.0, 30.0])),
            ("Y".to_string(), record(&[20.0])),
        ]);

        let mut buf = Vec::new();
        write_report(&report, &mut buf).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), report.to_string());
    }

    #[test]
    fn test_empty_report_writes_nothing() {
        let report = Report::new(Vec::new());
        let mut buf = Vec::new();
        write_report(&report, &mut buf).unwrap();
        assert!(buf.is_empty());
        assert!(report.is_empty());
    }
}
