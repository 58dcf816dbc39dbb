//! Tracing/logging setup shared by processes built on the domain crates.
//!
//! Domain crates only depend on the `tracing` facade; a presentation or
//! worker process calls [`init`] once at startup.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Filtering is configurable via `RUST_LOG` and defaults to `info`. Safe to
/// call multiple times; subsequent calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_idempotent() {
        super::init();
        super::init();
        tracing::debug!("still alive after double init");
    }
}
