//! Stacksift
//!
//! Filters and normalizes async-profiler "collapsed" snapshots so two
//! profiling runs can be diffed meaningfully in an editor.
//!
//! This crate provides the core implementation for the
//! `stacksift` CLI tool.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install stacksift
//! stacksift <output.zip> <snapshot.txt|snapshot.zip>
//! ```

pub mod commands;
pub mod filter;
pub mod output;
pub mod snapshot;
pub mod utils;
