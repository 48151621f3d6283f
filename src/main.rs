//! Stacksift CLI
//!
//! Preprocesses an async-profiler snapshot so it can be viewed and compared
//! in an editor: keeps only stacks reaching the anchor frame, truncates them
//! to start there, normalizes lambda frame names, and writes the result as a
//! single-entry zip archive.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use stacksift::commands::{execute_filter, validate_args, FilterArgs};
use stacksift::filter::FilterConfig;

/// Stacksift - filter and normalize collapsed profiler snapshots
#[derive(Parser, Debug)]
#[command(name = "stacksift")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path of the zip archive to write
    output: PathBuf,

    /// Snapshot to read (collapsed text file or zip archive)
    input: PathBuf,
}

fn main() -> Result<()> {
    // Parse CLI arguments (clap rejects any argument count other than two)
    let cli = Cli::parse();

    // Setup logging (overridable via RUST_LOG)
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = FilterArgs {
        output: cli.output,
        input: cli.input,
        config: FilterConfig::default(),
    };

    // Validate args first
    validate_args(&args)?;

    // Execute filter
    execute_filter(args)?;

    Ok(())
}
