//! Logging Infrastructure
//!
//! Structured logging setup shared by binaries and examples.

use tracing_subscriber::EnvFilter;

/// Initialize the logger with the default filter
pub fn init_logger() {
    init_logger_with_level(None);
}

/// Initialize the logger, preferring `RUST_LOG` over the given level
pub fn init_logger_with_level(level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.unwrap_or("info")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
