//! Optional tracing subscriber setup
//!
//! The library only emits `tracing` events. Binaries and tests that want to
//! see them call [`init`]; the filter is read from `RUST_LOG` and defaults
//! to `info`.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

static INSTALLED: OnceLock<Result<(), String>> = OnceLock::new();

/// Errors that may occur while initializing logging.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoggingError {
    /// Another global subscriber was installed first.
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(String),
}

/// Install a stdout subscriber. Subsequent calls return the first outcome.
pub fn init() -> Result<(), LoggingError> {
    INSTALLED
        .get_or_init(|| {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
            fmt()
                .with_env_filter(filter)
                .with_target(true)
                .try_init()
                .map_err(|e| e.to_string())
        })
        .clone()
        .map_err(LoggingError::SetGlobal)
}
