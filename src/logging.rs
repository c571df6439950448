//! Logging setup for the application.
//!
//! Installs a global tracing subscriber writing to stdout. The filter
//! defaults to `info` and can be overridden through `RUST_LOG`.

use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, fmt};

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize tracing. Subsequent calls are no-ops.
pub fn init() {
    if INITIALIZED.get().is_some() {
        return;
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
    let _ = INITIALIZED.set(());
}

/// Route panics through tracing so they end up next to the rest of the log
/// instead of on a bare stderr line.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("panic: {info}");
        previous(info);
    }));
}
