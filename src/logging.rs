//! Tracing subscriber bootstrap for the binaries

use crate::errors::{ChartError, Result};
use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `level`. Returns `Ok(false)` when a global
/// subscriber was already installed, so repeated calls are harmless.
pub fn init_tracing(level: &str, json: bool) -> Result<bool> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|err| ChartError::ConfigError {
            message: format!("invalid log level '{}': {}", level, err),
        })?,
    };

    let installed = if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init()
            .is_ok()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init()
            .is_ok()
    };

    Ok(installed)
}
