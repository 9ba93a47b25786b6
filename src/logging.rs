//! Logging utilities for the kelvin library.
//!
//! The library itself only emits `tracing` events; applications that want to
//! see them can install a subscriber with [`init_tracing`] or bring their own.

use tracing::info;

/// Initialize the tracing subscriber with the given log level.
///
/// `RUST_LOG` takes precedence over the provided level when set, so the
/// filter can still be refined per-module from the environment.
pub fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => val,
        Err(_) => log_level.to_string(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Log summary statistics for a loaded color table.
pub fn log_table_stats(path: &str, rows: usize, skipped: usize) {
    info!(
        operation = "table_load",
        path = path,
        rows = rows,
        skipped = skipped,
        "Color table loaded"
    );
}
