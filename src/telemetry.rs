//! Structured logging setup.
//!
//! The auditor logs at `warn` for skipped content files and at `debug` for
//! per-file progress. Levels are configurable via `RUST_LOG`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing from the `RUST_LOG` environment variable,
/// defaulting to `warn` so a clean audit stays quiet.
pub fn init_tracing() {
    init_tracing_with_filter(&std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()));
}

/// Initialize tracing at `debug` regardless of the environment (for `--verbose`).
pub fn init_tracing_verbose() {
    init_tracing_with_filter("debug");
}

/// Initialize tracing with an explicit filter directive.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing_with_filter(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}
