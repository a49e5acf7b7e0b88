//! Tracing/logging initialization.
//!
//! The integration itself only emits `debug!`/`trace!` events when output
//! is suppressed; a host that wants them visible calls [`init`] once.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    // Suppression events from the integration crates are debug-level;
    // surface them by default without turning the whole host chatty.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,osm_locale=debug,osm_placement=debug"));

    // JSON logs + timestamps, configurable via RUST_LOG.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
