//! Station Stats
//!
//! Streaming per-key statistics (count, min, mean, max) over large
//! `<key>;<value>` measurement files, with a key-sorted text report.
//!
//! This crate provides the core implementation for the
//! `station-stats` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! station-stats generate 1000000
//! station-stats > report.txt
//! ```
//!
//! ## Library use
//!
//! ```
//! use std::io::Cursor;
//! use station_stats::aggregator::aggregate_reader;
//!
//! let table = aggregate_reader(Cursor::new("A;3.0\nA;1.0\nA;2.0\n")).unwrap();
//! assert_eq!(table.into_report().to_string(), "A=3/1.0/2.0/3.0\n");
//! ```

pub mod aggregator;
pub mod commands;
pub mod generator;
pub mod output;
pub mod parser;
pub mod store;
pub mod utils;
