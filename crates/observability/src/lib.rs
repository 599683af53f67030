//! Tracing/logging setup shared by test harnesses and embedding binaries.
//!
//! The aging rules themselves are log-free; the shop dispatcher emits
//! `debug`-level records per aged item, and this crate wires up the
//! subscriber that makes them visible.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide tracing/logging.
///
/// Filtering defaults to `info` and is overridable via `RUST_LOG`. Safe to
/// call multiple times; subsequent calls become no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // JSON logs + timestamps, configurable via RUST_LOG.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
