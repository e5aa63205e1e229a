//! `brewpos-observability` — process-wide tracing setup.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the embedding process.
///
/// Safe to call more than once; later calls are no-ops. The filter honors
/// `RUST_LOG` and defaults to informational output for the workspace
/// crates only.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("brewpos=info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .with_target(false)
        .try_init();
}
