//! Diagnostic logging (tracing), separate from the user-facing status
//! lines in `ui::messages`.

use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding an `EnvFilter` directive, e.g. `attendlog=debug`.
pub const LOG_ENV: &str = "ATTENDLOG_LOG";

/// Install the global subscriber. Safe to call more than once: later
/// calls are ignored.
pub fn init(verbose: bool) {
    let default = if verbose { "attendlog=debug" } else { "warn" };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
