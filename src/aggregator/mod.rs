//! Streaming aggregation of measurements into per-key statistics.
//!
//! This module folds `(key, value)` pairs into:
//! - A `StatRecord` per key (count, min, max, running mean)
//! - An `AggregateTable` that is consumed once to build the sorted report

pub mod stats;
pub mod table;

// Re-export main types and functions
pub use stats::StatRecord;
pub use table::{aggregate_file, aggregate_reader, AggregateTable};
