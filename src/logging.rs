//! Logging setup
//!
//! Events are written to stderr so command output on stdout stays clean.
//! `--verbose` forces the `debug` level; otherwise `RUST_LOG` is honoured,
//! falling back to `warn`.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Filter directive used when neither `--verbose` nor `RUST_LOG` is set
pub const DEFAULT_FILTER: &str = "warn";

/// Build the filter for the given verbosity
pub fn env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global tracing subscriber
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
