//! Synthetic input generation.
//!
//! Produces `measurements.txt` files of arbitrary size from a fixed list of
//! weather stations, for benchmarking and testing the aggregator.

pub mod measurements;
pub mod stations;

pub use measurements::{default_stations, generate, generate_file, generate_from, WeatherStation};
pub use stations::STATIONS;
