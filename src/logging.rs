//! Development-time tracing for debugging dispatch loops.
//!
//! Diagnostics go to stderr via `RUST_LOG` and are separate from the product
//! output and stderr streams a loop writes units' bytes to: those belong to
//! the caller and are never touched by tracing.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber for development logging.
///
/// Reads `RUST_LOG`, defaulting to `warn` when unset. Output goes to stderr
/// in compact format.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
