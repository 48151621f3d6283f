//! Filter command implementation.
//!
//! The filter command:
//! 1. Resolves the snapshot source (plain text or zip archive)
//! 2. Opens the output archive under the resolved entry name
//! 3. Filters and rewrites lines in a single pass
//! 4. Finalizes the archive and reports counts

use crate::filter::{FilterConfig, LineFilter};
use crate::output::ArchiveWriter;
use crate::snapshot::Snapshot;
use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the filter command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct FilterArgs {
    /// Output archive path
    pub output: PathBuf,

    /// Snapshot to read (collapsed text file or zip archive)
    pub input: PathBuf,

    /// Filter configuration
    pub config: FilterConfig,
}

impl Default for FilterArgs {
    fn default() -> Self {
        Self {
            output: PathBuf::from("snapshot-filtered.zip"),
            input: PathBuf::from("snapshot.txt"),
            config: FilterConfig::default(),
        }
    }
}

/// Line counts for one filter run
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterStats {
    /// Lines read from the source
    pub lines_read: u64,

    /// Lines that contained the anchor frame and were written
    pub lines_kept: u64,
}

impl FilterStats {
    pub fn lines_dropped(&self) -> u64 {
        self.lines_read - self.lines_kept
    }

    /// Human-readable one-line summary
    pub fn summary(&self) -> String {
        format!(
            "kept {} of {} lines ({} dropped)",
            self.lines_kept,
            self.lines_read,
            self.lines_dropped()
        )
    }
}

/// Validate filter arguments
///
/// **Public** - called before execute_filter, before any file is opened
///
/// # Returns
/// Ok if arguments are valid, Err with message if not
pub fn validate_args(args: &FilterArgs) -> Result<()> {
    // Deliberately a plain path comparison, not canonicalization: the guard
    // exists to stop the obvious self-overwrite, nothing more.
    if args.output == args.input {
        bail!("Input and output should be different files");
    }

    if args.config.anchor_frame.is_empty() {
        bail!("Anchor frame cannot be empty");
    }

    Ok(())
}

/// Execute the filter command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Filter command arguments
///
/// # Returns
/// Line counts for the run
///
/// # Errors
/// * Snapshot resolution failures (missing file, bad archive, entry count)
/// * A thread-prefixed line missing its marker in keep-threads mode
/// * File write errors
pub fn execute_filter(args: FilterArgs) -> Result<FilterStats> {
    let start_time = Instant::now();

    info!("Filtering snapshot: {}", args.input.display());
    debug!("Anchor frame: {}", args.config.anchor_frame);

    let line_filter = LineFilter::new(&args.config).context("Failed to compile line filter")?;

    let snapshot = Snapshot::open(&args.input).context("Failed to open snapshot")?;
    let entry_name = snapshot.entry_name.clone();

    let mut writer = ArchiveWriter::create(&args.output, &entry_name)
        .context("Failed to create output archive")?;

    let mut stats = FilterStats::default();
    for line in snapshot.lines() {
        let line = line.context("Failed to read snapshot line")?;
        stats.lines_read += 1;

        if let Some(kept) = line_filter.apply(&line)? {
            writer
                .write_line(&kept)
                .context("Failed to write output line")?;
            stats.lines_kept += 1;
        }
    }

    writer.finish().context("Failed to finalize output archive")?;

    info!("✓ Snapshot written to: {}", args.output.display());
    info!("Filter completed in {:.2}s: {}", start_time.elapsed().as_secs_f64(), stats.summary());

    Ok(stats)
}
