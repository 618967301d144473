//! Output writers for aggregation results.
//!
//! This module handles writing the sorted text report to any `Write`
//! (stdout in the CLI, buffers in tests).

pub mod report;

// Re-export main types and functions
pub use report::{write_report, Report};
