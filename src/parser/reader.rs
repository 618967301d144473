//! Streaming reader that feeds parsed measurements to a callback.
//!
//! One line buffer is reused for the whole stream, so memory stays flat
//! regardless of input size.

use super::line::parse_line;
use crate::utils::error::ParseError;
use crate::utils::Progress;
use log::debug;
use std::io::{self, BufRead};

/// Stream every measurement in `reader` through `on_measurement`
///
/// **Public** - shared by the aggregator and the store loader
///
/// Stops at the first I/O error, parse error, or callback error.
///
/// # Returns
/// Number of lines consumed
pub fn scan_measurements<R, E, F>(reader: R, on_measurement: F) -> Result<u64, E>
where
    R: BufRead,
    E: From<io::Error> + From<ParseError>,
    F: FnMut(&str, f64) -> Result<(), E>,
{
    scan_with_progress(reader, Progress::new("Read"), on_measurement)
}

/// Same as `scan_measurements` with an explicit progress reporter
pub fn scan_with_progress<R, E, F>(
    mut reader: R,
    progress: Progress,
    mut on_measurement: F,
) -> Result<u64, E>
where
    R: BufRead,
    E: From<io::Error> + From<ParseError>,
    F: FnMut(&str, f64) -> Result<(), E>,
{
    let mut buf = String::new();
    let mut lines: u64 = 0;

    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
        lines += 1;

        let measurement = parse_line(&buf).map_err(|e| e.at_line(lines))?;
        on_measurement(measurement.key, measurement.value)?;

        progress.tick(lines);
    }

    debug!("Scanned {} lines in {:.2}s", lines, progress.elapsed_secs());

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::AggregateError;
    use std::io::Cursor;

    #[test]
    fn test_scan_collects_all_lines() {
        let input = Cursor::new("A;1.0\nB;2.0\nA;3.0\n");
        let mut seen = Vec::new();

        let lines = scan_measurements::<_, AggregateError, _>(input, |key, value| {
            seen.push((key.to_string(), value));
            Ok(())
        })
        .unwrap();

        assert_eq!(lines, 3);
        assert_eq!(
            seen,
            vec![
                ("A".to_string(), 1.0),
                ("B".to_string(), 2.0),
                ("A".to_string(), 3.0)
            ]
        );
    }

    #[test]
    fn test_last_line_without_newline() {
        let input = Cursor::new("A;1.0\nB;2.0");
        let lines = scan_measurements::<_, AggregateError, _>(input, |_, _| Ok(())).unwrap();
        assert_eq!(lines, 2);
    }

    #[test]
    fn test_error_reports_line_number() {
        let input = Cursor::new("A;1.0\nB;2.0\nbroken\nC;4.0\n");
        let mut calls = 0;

        let err = scan_measurements::<_, AggregateError, _>(input, |_, _| {
            calls += 1;
            Ok(())
        })
        .unwrap_err();

        assert_eq!(calls, 2);
        match err {
            AggregateError::Parse(e) => assert_eq!(e.line(), 3),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_empty_input() {
        let input = Cursor::new("");
        let lines = scan_measurements::<_, AggregateError, _>(input, |_, _| Ok(())).unwrap();
        assert_eq!(lines, 0);
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let input = Cursor::new(vec![b'A', b';', 0xff, b'\n']);
        let err = scan_measurements::<_, AggregateError, _>(input, |_, _| Ok(())).unwrap_err();
        assert!(matches!(err, AggregateError::Io(_)));
    }
}
