//! Profiling utilities based on the `puffin` crate.
//!
//! Scopes are recorded only after [`set_enabled`] (or [`init_profiling`])
//! turns them on, so instrumented geometry code costs next to nothing in
//! normal runs.

pub use puffin::{GlobalProfiler, profile_function, profile_scope};

/// Address the puffin_http server listens on.
pub const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8585";

/// Turn scope recording on or off.
pub fn set_enabled(enabled: bool) {
    puffin::set_scopes_on(enabled);
}

/// Whether scopes are currently recorded.
pub fn is_enabled() -> bool {
    puffin::are_scopes_on()
}

/// Mark the start of a new frame (or edit step) in the profiler.
#[inline]
pub fn new_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}

#[cfg(feature = "profiling-server")]
static PROFILING_SERVER: std::sync::OnceLock<puffin_http::Server> = std::sync::OnceLock::new();

/// Enable scopes and start a puffin_http server for `puffin_viewer`.
///
/// # Example
/// ```no_run
/// use polymesh_core::profiling::init_profiling;
///
/// init_profiling();
/// ```
#[cfg(feature = "profiling-server")]
pub fn init_profiling() {
    set_enabled(true);

    match puffin_http::Server::new(DEFAULT_SERVER_ADDR) {
        Ok(server) => {
            tracing::info!("Puffin profiler server started on http://{DEFAULT_SERVER_ADDR}");
            let _ = PROFILING_SERVER.set(server);
        }
        Err(e) => {
            tracing::error!("Failed to start puffin server: {}", e);
        }
    }
}
