//! Stack line filtering and normalization.
//!
//! This module decides which snapshot lines survive and how they are
//! rewritten:
//! - drop lines that never reach the anchor frame
//! - truncate survivors to start at the anchor
//! - optionally keep the bracketed thread-name prefix
//! - normalize unstable lambda frame names

pub mod config;
pub mod line;

// Re-export main types
pub use config::FilterConfig;
pub use line::LineFilter;
