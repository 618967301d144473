//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod calculate;
pub mod generate;
pub mod load;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use calculate::{execute_calculate, validate_calculate_args};
pub use generate::{execute_generate, validate_generate_args};
pub use load::{execute_load, validate_load_args};
pub use models::{CalculateArgs, GenerateArgs, LoadArgs};
