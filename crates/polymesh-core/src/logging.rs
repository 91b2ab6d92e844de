//! Tracing subscriber bootstrap.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,polymesh_geometry=debug";

/// Install a fmt subscriber honouring `RUST_LOG`.
///
/// Call once from the application. Calling it again is harmless: the second
/// installation attempt is ignored.
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Install a fmt subscriber, falling back to `default_filter` when `RUST_LOG`
/// is unset or unparsable.
pub fn init_with_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        tracing::trace!("tracing subscriber already installed");
    }
}
