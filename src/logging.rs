//! Structured logging via `tracing`.
//!
//! Events go to stderr so they never mix with the summary on stdout.
//! `RUST_LOG` takes precedence over the level derived from verbosity.

use crate::output::Verbosity;
use tracing_subscriber::{EnvFilter, fmt};

/// Default filter directive for a verbosity level
#[must_use]
pub const fn default_directive(verbosity: Verbosity) -> &'static str {
    match verbosity {
        Verbosity::Quiet => "error",
        Verbosity::Normal => "warn",
        Verbosity::Verbose => "treediff=debug,info",
    }
}

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
