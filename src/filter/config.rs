//! Filter configuration.

use crate::utils::config::{ANCHOR_FRAME, KEEP_THREADS, LAMBDA_PATTERN, LAMBDA_REPLACEMENT};

/// Filter configuration
///
/// Defaults to the baked-in constants; tests and library callers can
/// override every knob without touching them.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Frame that must be present for a line to be retained
    pub anchor_frame: String,

    /// Keep the bracketed thread-name prefix on retained lines
    pub keep_threads: bool,

    /// Pattern matching unstable lambda frame names
    pub lambda_pattern: String,

    /// Replacement for lambda pattern matches
    pub lambda_replacement: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            anchor_frame: ANCHOR_FRAME.to_string(),
            keep_threads: KEEP_THREADS,
            lambda_pattern: LAMBDA_PATTERN.to_string(),
            lambda_replacement: LAMBDA_REPLACEMENT.to_string(),
        }
    }
}

impl FilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor_frame = anchor.into();
        self
    }

    pub fn with_keep_threads(mut self, keep: bool) -> Self {
        self.keep_threads = keep;
        self
    }
}
