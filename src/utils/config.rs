//! Configuration constants for the CLI.

/// Keep only stacks containing this frame.
///
/// Lines that never mention it are dropped; retained lines are truncated to
/// start at its first occurrence.
pub const ANCHOR_FRAME: &str =
    "org/jetbrains/kotlin/cli/jvm/compiler/KotlinToJVMBytecodeCompiler.compileModules$cli;";

/// `false` merges stacks from all threads and drops the thread name,
/// `true` keeps the bracketed thread prefix as is.
pub const KEEP_THREADS: bool = false;

/// Java 8+ lambda frames carry unstable per-compilation numbers,
/// e.g. `Lambda$12345/67890`. Note that replacing them merges frames for
/// different lambdas invoked at the same location.
pub const LAMBDA_PATTERN: &str = r"Lambda\$(\d+)/(\d+)";

/// Replacement for [`LAMBDA_PATTERN`] matches.
pub const LAMBDA_REPLACEMENT: &str = "Lambda";

/// Closing delimiter of a bracketed thread-name prefix, e.g. `[main];`.
pub const THREAD_MARKER: &str = "];";

/// How many entry names to include in the diagnostic when a snapshot
/// archive has the wrong entry count.
pub const ENTRY_PREVIEW_LIMIT: usize = 5;
