//! Per-line filter and transform.
//!
//! Collapsed snapshot lines look like "frame1;frame2;...;frameN count",
//! optionally prefixed by a bracketed thread name: "[main];frame1;... count".
//! A line survives only if it mentions the anchor frame; survivors are
//! truncated to start at the anchor, keeping the thread prefix when
//! configured, and lambda frames are rewritten to a stable name.

use crate::filter::config::FilterConfig;
use crate::utils::config::THREAD_MARKER;
use crate::utils::error::FilterError;
use regex::Regex;

/// Compiled line filter
///
/// **Public** - built once per run, applied to every line
pub struct LineFilter {
    anchor: String,
    keep_threads: bool,
    lambda: Regex,
    replacement: String,
}

impl LineFilter {
    /// Compile a filter from its configuration.
    ///
    /// # Errors
    /// * `FilterError::InvalidPattern` - lambda pattern does not compile
    pub fn new(config: &FilterConfig) -> Result<Self, FilterError> {
        Ok(Self {
            anchor: config.anchor_frame.clone(),
            keep_threads: config.keep_threads,
            lambda: Regex::new(&config.lambda_pattern)?,
            replacement: config.lambda_replacement.clone(),
        })
    }

    /// Apply the filter to one line.
    ///
    /// Returns `None` for lines without the anchor frame (dropped), or the
    /// transformed line to write. Matching is a plain substring search for
    /// the *first* occurrence; a frame that merely contains the anchor as a
    /// substring matches too.
    ///
    /// # Errors
    /// * `FilterError::MissingThreadMarker` - thread retention is on but the
    ///   line has no `];` at a positive index
    pub fn apply(&self, line: &str) -> Result<Option<String>, FilterError> {
        let Some(anchor) = line.find(&self.anchor) else {
            return Ok(None);
        };

        let mut result = String::new();
        if self.keep_threads {
            match line.find(THREAD_MARKER) {
                // Thread retention assumes every frame line is
                // thread-prefixed, so a missing marker is fatal rather
                // than a skip. A marker at index 0 has an empty name and
                // fails the same way.
                Some(pos) if pos > 0 => result.push_str(&line[..pos + THREAD_MARKER.len()]),
                _ => return Err(FilterError::MissingThreadMarker(line.to_string())),
            }
        }

        result.push_str(&self.lambda.replace_all(&line[anchor..], self.replacement.as_str()));
        Ok(Some(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(config: FilterConfig) -> LineFilter {
        LineFilter::new(&config).unwrap()
    }

    fn anchored() -> LineFilter {
        filter(FilterConfig::new().with_anchor("ANCHOR;"))
    }

    #[test]
    fn test_line_without_anchor_is_dropped() {
        assert_eq!(anchored().apply("foo;bar 5").unwrap(), None);
    }

    #[test]
    fn test_line_truncates_at_anchor() {
        let result = anchored().apply("a;b;ANCHOR;c 10").unwrap();
        assert_eq!(result.as_deref(), Some("ANCHOR;c 10"));
    }

    #[test]
    fn test_anchor_at_line_start() {
        let result = anchored().apply("ANCHOR;c 10").unwrap();
        assert_eq!(result.as_deref(), Some("ANCHOR;c 10"));
    }

    #[test]
    fn test_first_anchor_occurrence_wins() {
        let result = anchored().apply("a;ANCHOR;b;ANCHOR;c 1").unwrap();
        assert_eq!(result.as_deref(), Some("ANCHOR;b;ANCHOR;c 1"));
    }

    #[test]
    fn test_substring_anchor_matches() {
        // Substring semantics: a longer frame containing the anchor matches.
        let result = anchored().apply("a;preANCHOR;b 1").unwrap();
        assert_eq!(result.as_deref(), Some("ANCHOR;b 1"));
    }

    #[test]
    fn test_lambda_frames_are_normalized() {
        let result = anchored()
            .apply("a;ANCHOR;Lambda$123/456.invoke;c 7")
            .unwrap();
        assert_eq!(result.as_deref(), Some("ANCHOR;Lambda.invoke;c 7"));
    }

    #[test]
    fn test_all_lambda_occurrences_are_normalized() {
        let result = anchored()
            .apply("ANCHOR;Lambda$1/2.run;x;Lambda$34/56.apply 3")
            .unwrap();
        assert_eq!(result.as_deref(), Some("ANCHOR;Lambda.run;x;Lambda.apply 3"));
    }

    #[test]
    fn test_partial_lambda_pattern_survives() {
        // No "/<digits>" part, so the pattern does not match.
        let result = anchored().apply("ANCHOR;Lambda$123.run 2").unwrap();
        assert_eq!(result.as_deref(), Some("ANCHOR;Lambda$123.run 2"));
    }

    #[test]
    fn test_lambda_before_anchor_is_discarded() {
        let result = anchored().apply("Lambda$1/2;ANCHOR;b 4").unwrap();
        assert_eq!(result.as_deref(), Some("ANCHOR;b 4"));
    }

    #[test]
    fn test_keep_threads_preserves_prefix() {
        let f = filter(FilterConfig::new().with_anchor("ANCHOR;").with_keep_threads(true));
        let result = f.apply("[Thread-1];a;ANCHOR;b 3").unwrap();
        assert_eq!(result.as_deref(), Some("[Thread-1];ANCHOR;b 3"));
    }

    #[test]
    fn test_keep_threads_missing_marker_fails() {
        let f = filter(FilterConfig::new().with_anchor("ANCHOR;").with_keep_threads(true));
        let err = f.apply("a;ANCHOR;b 3").unwrap_err();
        assert!(matches!(err, FilterError::MissingThreadMarker(_)));
    }

    #[test]
    fn test_keep_threads_marker_at_start_fails() {
        let f = filter(FilterConfig::new().with_anchor("ANCHOR;").with_keep_threads(true));
        let err = f.apply("];ANCHOR;b 3").unwrap_err();
        assert!(matches!(err, FilterError::MissingThreadMarker(_)));
    }

    #[test]
    fn test_keep_threads_still_drops_unanchored_lines() {
        // The anchor check runs first, so unprefixed lines without the
        // anchor are dropped, not failed.
        let f = filter(FilterConfig::new().with_anchor("ANCHOR;").with_keep_threads(true));
        assert_eq!(f.apply("a;b 3").unwrap(), None);
    }

    #[test]
    fn test_invalid_lambda_pattern_is_rejected() {
        let mut config = FilterConfig::new();
        config.lambda_pattern = "(".to_string();
        assert!(matches!(
            LineFilter::new(&config),
            Err(FilterError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_default_anchor_matches_real_snapshot_line() {
        let f = LineFilter::new(&FilterConfig::default()).unwrap();
        let line = "java/lang/Thread.run;\
                    org/jetbrains/kotlin/cli/jvm/compiler/KotlinToJVMBytecodeCompiler.compileModules$cli;\
                    org/jetbrains/kotlin/backend/jvm/JvmIrCodegenFactory.invokeLowerings 42";
        let result = f.apply(line).unwrap().unwrap();
        assert!(result.starts_with("org/jetbrains/kotlin/cli/jvm/compiler/"));
        assert!(result.ends_with(" 42"));
    }
}
