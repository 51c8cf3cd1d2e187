//! Logging setup shared by the fitlog binaries.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing with the default level (info)
pub fn init() {
    init_with_level("info")
}

/// Initialize tracing with a specific default level
///
/// `RUST_LOG` overrides the default when set. Output uses the compact
/// fmt layer.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}
