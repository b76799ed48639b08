//! Tracing setup for the binary
//!
//! The library only emits events; installing a subscriber is up to the caller.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Build the filter from `RUST_LOG`, falling back to `default_directive`
///
/// An unparsable fallback degrades to `warn`.
#[must_use]
pub fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install a stderr `fmt` subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing(default_directive: &str) {
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(env_filter(default_directive))
        .try_init();

    tracing::trace!("tracing initialised");
}
