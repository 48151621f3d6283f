//! CLI command implementations.
//!
//! Commands orchestrate the library components to perform user tasks.

pub mod filter;

// Re-export main command functions
pub use filter::{execute_filter, validate_args, FilterArgs, FilterStats};
