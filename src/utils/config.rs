//! Configuration and constants for the CLI.

/// Input file read when no path is given
pub const DEFAULT_INPUT: &str = "measurements.txt";

/// Separator between key and value on every input line
pub const DELIMITER: char = ';';

/// Rows per transaction when loading into the relational store
pub const DEFAULT_BATCH_SIZE: usize = 10_000;

/// Lines between two progress log messages
pub const PROGRESS_INTERVAL: u64 = 50_000_000;

/// Standard deviation of generated readings around a station's mean
pub const GENERATOR_STD_DEV: f64 = 10.0;

// Upper bounds for argument validation
pub const MAX_BATCH_SIZE: usize = 1_000_000;
