//! Logging infrastructure.

use tracing_subscriber::EnvFilter;

pub struct Logger;

impl Logger {
    /// Installs the global tracing subscriber. `RUST_LOG` overrides the
    /// default `info` level.
    pub fn init() {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();
    }
}
