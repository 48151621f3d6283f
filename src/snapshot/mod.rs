//! Snapshot input handling.
//!
//! Resolves a snapshot path (plain text file or single-entry zip archive)
//! into an entry name and a line reader.

pub mod source;

// Re-export main types
pub use source::Snapshot;
