//! Wires engine logger to the `log` facade.

#[cfg(test)]
#[path = "../../tests/unit/extensions/logging_test.rs"]
mod logging_test;

use super::config::{DEFAULT_LOG_LEVEL, LoggingConfig};
use relief_core::utils::Environment;
use std::sync::Arc;

/// Initializes global logger. `RUST_LOG` takes precedence over configured level.
pub fn init_logger(config: &LoggingConfig) {
    if !config.enabled {
        return;
    }

    let level = config.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL);

    // repeated initialization is not an error, the first logger stays
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).try_init();
}

/// Creates an environment which forwards engine messages to the `log` facade.
pub fn create_environment(config: &LoggingConfig) -> Environment {
    if config.enabled {
        Environment::new(Arc::new(|msg: &str| log::info!("{msg}")))
    } else {
        Environment::new_silent()
    }
}
