//! Logging configuration and initialization
//!
//! This module handles all logging setup for the tally binaries.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the application
///
/// Verbosity maps to `info` by default, `debug` for `-v` and `trace` for
/// `-vv` and above. A `RUST_LOG` environment filter takes precedence over the
/// mapped level. Logs go to stderr so ranked output on stdout stays clean.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2) // Show target module for -vv and above
        .with_line_number(verbose >= 3) // Show line numbers for -vvv
        .init();
}
