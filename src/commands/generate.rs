//! Generate command implementation.

use super::models::GenerateArgs;
use crate::generator::generate_file;
use anyhow::{Context, Result};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

/// Execute the generate command
///
/// **Public** - main entry point called from main.rs
pub fn execute_generate(args: &GenerateArgs) -> Result<u64> {
    let start_time = Instant::now();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let written = generate_file(&args.output, &mut rng, args.size)
        .with_context(|| format!("Failed to generate {}", args.output.display()))?;

    info!(
        "✓ Wrote {} measurements to {} in {:.2}s",
        written,
        args.output.display(),
        start_time.elapsed().as_secs_f64()
    );

    Ok(written)
}

/// Validate generate arguments
pub fn validate_generate_args(args: &GenerateArgs) -> Result<()> {
    if args.size == 0 {
        anyhow::bail!("size must be greater than 0");
    }

    if args.output.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if args.output.is_dir() {
        anyhow::bail!("Output path is a directory: {}", args.output.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_args_zero_size() {
        assert!(validate_generate_args(&GenerateArgs::default()).is_err());
    }

    #[test]
    fn test_validate_args_valid() {
        let args = GenerateArgs {
            size: 1_000,
            ..Default::default()
        };
        assert!(validate_generate_args(&args).is_ok());
    }
}
