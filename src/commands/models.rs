use crate::utils::config::{DEFAULT_BATCH_SIZE, DEFAULT_INPUT};
use std::path::PathBuf;

/// Arguments for the calculate command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct CalculateArgs {
    /// Measurements file to aggregate
    pub input: PathBuf,
}

impl Default for CalculateArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
        }
    }
}

/// Arguments for the load command
#[derive(Debug, Clone)]
pub struct LoadArgs {
    /// Measurements file to load
    pub input: PathBuf,

    /// Rows per transaction
    pub batch_size: usize,
}

impl Default for LoadArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

/// Arguments for the generate command
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    /// Number of lines to write
    pub size: u64,

    /// Destination file (truncated if it exists)
    pub output: PathBuf,

    /// RNG seed for reproducible output (None = OS entropy)
    pub seed: Option<u64>,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            size: 0,
            output: PathBuf::from(DEFAULT_INPUT),
            seed: None,
        }
    }
}
