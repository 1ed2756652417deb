//! Tracing initialization.

use tracing_subscriber::{fmt, EnvFilter, prelude::*};

const DEFAULT_FILTER: &str = "info,peelgrid=info,tower_http=info,axum=info";

/// Install the global subscriber: fmt output filtered by RUST_LOG, e.g.
/// RUST_LOG=debug,tower_http=info
///
/// A second call (tests, the bot inside a test) is a no-op.
pub fn init() {
    let fmt_layer = fmt::layer()
        .with_target(true);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
