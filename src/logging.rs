//! Logging setup for the binary.
//!
//! Library crates only emit `tracing` events; this installs the subscriber
//! that prints them to stderr.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive (e.g. `gridsheet_core=trace`).
pub const LOG_ENV: &str = "GRIDSHEET_LOG";

/// Install the stderr subscriber. `verbose` forces `debug`; otherwise
/// `GRIDSHEET_LOG` is honoured, falling back to `warn`.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be installed (tests); keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
