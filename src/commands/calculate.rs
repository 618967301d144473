//! Calculate command implementation.
//!
//! The calculate command:
//! 1. Streams the measurements file through the aggregator
//! 2. Sorts the per-key statistics
//! 3. Writes the report to the given writer (stdout in the CLI)
//!
//! Nothing is written unless the whole input aggregated cleanly.

use super::models::CalculateArgs;
use crate::aggregator::aggregate_file;
use crate::output::write_report;
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;
use std::time::Instant;

/// Execute the calculate command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Input file cannot be opened or read
/// * A malformed line (no report is written)
/// * Writing the report fails
pub fn execute_calculate<W: Write>(args: &CalculateArgs, out: W) -> Result<()> {
    let start_time = Instant::now();

    info!("Step 1/2: Aggregating {}...", args.input.display());
    let table = aggregate_file(&args.input)
        .with_context(|| format!("Failed to aggregate {}", args.input.display()))?;

    debug!(
        "Aggregated {} observations across {} keys",
        table.observations(),
        table.len()
    );

    info!("Step 2/2: Writing report...");
    let report = table.into_report();
    write_report(&report, out).context("Failed to write report")?;

    info!(
        "Calculate completed in {:.2}s ({} keys)",
        start_time.elapsed().as_secs_f64(),
        report.len()
    );

    Ok(())
}

/// Validate calculate arguments
pub fn validate_calculate_args(args: &CalculateArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.input.is_dir() {
        anyhow::bail!("Input path is a directory: {}", args.input.display());
    }

    Ok(())
}
