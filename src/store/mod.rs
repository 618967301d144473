//! Relational batch-load path.
//!
//! An alternative ingestion strategy: raw rows go into an in-memory SQLite
//! table instead of being folded into running statistics.

pub mod sqlite;

pub use sqlite::{LoadSummary, MeasurementStore};
