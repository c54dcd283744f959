//! Process-wide logging setup for embedders

use std::sync::Once;

static INIT_LOGGING: Once = Once::new();

/// Install the tracing subscriber for the host process.
///
/// Respects `RUST_LOG`, defaulting to `warn`, and writes to stderr. Safe to
/// call more than once; only the first call installs the subscriber.
pub fn init_logging() {
    INIT_LOGGING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_writer(std::io::stderr)
            .init();
    });
}
