//! Logging setup for the binaries and demos.
//!
//! The library itself only emits `tracing` events; installing a subscriber
//! is left to the process entry point.

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber filtered by `RUST_LOG`
///
/// Falls back to `default_directive` (for example `"payoff_sim=info"`) when
/// `RUST_LOG` is unset or unparsable. Calling this more than once is a no-op.
pub fn init_tracing(default_directive: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
