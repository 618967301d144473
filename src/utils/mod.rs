//! Utility modules for configuration, error handling, and logging.

pub mod error;
pub mod config;
pub mod progress;

// Re-export commonly used error types for convenience
pub use error::{AggregateError, GenerateError, OutputError, ParseError, StoreError};
pub use progress::Progress;
