//! Diagnostic tracing for the todo CLI.
//!
//! Diagnostics go to stderr so they never interleave with shell output on
//! stdout. Storage problems (unreadable collection, failed write-through) are
//! logged at `warn`, which is the default level.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
///
/// # Example
/// ```bash
/// RUST_LOG=todo=debug cargo run -- list
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
