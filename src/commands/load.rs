//! Load command implementation.
//!
//! Streams the measurements file into an in-memory SQLite table in
//! transactional batches and logs how much was loaded. The store lives only
//! for the duration of the command.

use super::models::LoadArgs;
use super::utils::open_input;
use crate::store::{LoadSummary, MeasurementStore};
use crate::utils::config::MAX_BATCH_SIZE;
use anyhow::{Context, Result};
use log::info;
use std::time::Instant;

/// Execute the load command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// Rows and transactions committed
pub fn execute_load(args: &LoadArgs) -> Result<LoadSummary> {
    let start_time = Instant::now();

    info!("Step 1/2: Creating in-memory store...");
    let mut store = MeasurementStore::open_in_memory().context("Failed to create store")?;

    info!(
        "Step 2/2: Loading {} in batches of {}...",
        args.input.display(),
        args.batch_size
    );
    let reader = open_input(&args.input)?;
    let summary = store
        .load(reader, args.batch_size)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;

    let keys = store.key_count().context("Failed to count keys")?;
    info!(
        "✓ Loaded {} rows ({} distinct ids) in {:.2}s",
        summary.rows,
        keys,
        start_time.elapsed().as_secs_f64()
    );

    Ok(summary)
}

/// Validate load arguments
pub fn validate_load_args(args: &LoadArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.batch_size == 0 {
        anyhow::bail!("batch_size must be greater than 0");
    }

    if args.batch_size > MAX_BATCH_SIZE {
        anyhow::bail!("batch_size is too large (max {})", MAX_BATCH_SIZE);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_args_default() {
        assert!(validate_load_args(&LoadArgs::default()).is_ok());
    }

    #[test]
    fn test_validate_args_zero_batch() {
        let args = LoadArgs {
            batch_size: 0,
            ..Default::default()
        };
        assert!(validate_load_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_batch_too_large() {
        let args = LoadArgs {
            batch_size: MAX_BATCH_SIZE + 1,
            ..Default::default()
        };
        assert!(validate_load_args(&args).is_err());
    }
}
