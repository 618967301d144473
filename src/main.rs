//! Station Stats CLI
//!
//! Aggregates `<key>;<value>` measurement files into a sorted
//! `key=count/min/mean/max` report.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use station_stats::commands::{
    execute_calculate, execute_generate, execute_load, validate_calculate_args,
    validate_generate_args, validate_load_args, CalculateArgs, GenerateArgs, LoadArgs,
};
use station_stats::utils::config::{DEFAULT_BATCH_SIZE, DEFAULT_INPUT};

/// Station Stats - per-station min/mean/max over measurement files
///
/// With no subcommand, aggregates measurements.txt in the working directory.
#[derive(Parser, Debug)]
#[command(name = "station-stats")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Aggregate a measurements file and print the report
    Calculate {
        /// Measurements file
        #[arg(short, long, default_value = DEFAULT_INPUT)]
        input: PathBuf,
    },

    /// Load a measurements file into an in-memory SQLite table
    Load {
        /// Measurements file
        #[arg(short, long, default_value = DEFAULT_INPUT)]
        input: PathBuf,

        /// Rows per transaction
        #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
        batch_size: usize,
    },

    /// Generate a synthetic measurements file
    Generate {
        /// Number of lines to write
        size: u64,

        /// Output path
        #[arg(short, long, default_value = DEFAULT_INPUT)]
        output: PathBuf,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging (stderr, so stdout carries only the report)
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        None => run_calculate(CalculateArgs::default())?,

        Some(Commands::Calculate { input }) => run_calculate(CalculateArgs { input })?,

        Some(Commands::Load { input, batch_size }) => {
            let args = LoadArgs { input, batch_size };
            validate_load_args(&args)?;
            execute_load(&args)?;
        }

        Some(Commands::Generate { size, output, seed }) => {
            let args = GenerateArgs { size, output, seed };
            validate_generate_args(&args)?;
            execute_generate(&args)?;
        }
    }

    Ok(())
}

/// Aggregate and print to stdout
///
/// **Private** - shared by the default and explicit calculate paths
fn run_calculate(args: CalculateArgs) -> Result<()> {
    validate_calculate_args(&args)?;

    let stdout = io::stdout();
    execute_calculate(&args, BufWriter::new(stdout.lock()))
}
