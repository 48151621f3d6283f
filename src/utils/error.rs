//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while opening and reading a snapshot source
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read snapshot archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("snapshot archive must contain exactly one entry, found {count}: {names}")]
    EntryCount { count: usize, names: String },

    #[error("snapshot path has no file name: {0}")]
    InvalidPath(String),
}

/// Errors that can occur while filtering stack lines
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("invalid lambda pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("no thread marker in frame line: {0}")]
    MissingThreadMarker(String),
}

/// Errors that can occur while writing the output archive
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("failed to write output file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to write output archive: {0}")]
    Archive(#[from] zip::result::ZipError),
}
