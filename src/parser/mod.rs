//! Measurement input parsing.
//!
//! This module handles:
//! - Splitting `<key>;<value>` lines
//! - Validating values
//! - Streaming a reader line by line with progress logging

pub mod line;
pub mod reader;

// Re-export main types
pub use line::{parse_line, Measurement};
pub use reader::{scan_measurements, scan_with_progress};
