//! Line parser for `<key>;<value>` measurement records.

use crate::utils::config::DELIMITER;
use crate::utils::error::ParseError;

/// One parsed observation, borrowing its key from the input line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement<'a> {
    /// Grouping key (text before the first delimiter)
    pub key: &'a str,

    /// Observed value
    pub value: f64,
}

/// Parse a single measurement line
///
/// **Public** - main entry point for line parsing
///
/// Trailing whitespace (including `\n` and `\r\n`) is stripped before
/// splitting on the first `;`. Errors carry line number 0; stream readers
/// attach the real line number.
///
/// # Errors
/// * `ParseError::MissingDelimiter` - no `;` on the line
/// * `ParseError::EmptyKey` - nothing before the `;`
/// * `ParseError::InvalidValue` - value is not a finite decimal number
pub fn parse_line(line: &str) -> Result<Measurement<'_>, ParseError> {
    let line = line.trim_end();

    let (key, raw_value) = line
        .split_once(DELIMITER)
        .ok_or_else(|| ParseError::MissingDelimiter {
            line: 0,
            content: line.to_string(),
        })?;

    if key.is_empty() {
        return Err(ParseError::EmptyKey {
            line: 0,
            content: line.to_string(),
        });
    }

    let value = parse_value(raw_value)?;

    Ok(Measurement { key, value })
}

/// Parse the value segment of a line
///
/// **Private** - rejects NaN and infinities, which have no place in min/mean/max
fn parse_value(raw: &str) -> Result<f64, ParseError> {
    let invalid = || ParseError::InvalidValue {
        line: 0,
        value: raw.to_string(),
    };

    let value: f64 = raw.parse().map_err(|_| invalid())?;

    if !value.is_finite() {
        return Err(invalid());
    }

    Ok(value)
}
