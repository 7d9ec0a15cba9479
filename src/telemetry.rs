//! Logging setup for hosts embedding the tasks.
//!
//! The tasks only emit `tracing` events; installing a subscriber is left to
//! the host process.

use tracing_subscriber::EnvFilter;

/// Default filter applied when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "identity_import_workflow=info";

/// Installs a formatted subscriber filtered by `RUST_LOG`.
///
/// Returns `false` when a global subscriber was already installed.
#[must_use]
pub fn init_tracing() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
