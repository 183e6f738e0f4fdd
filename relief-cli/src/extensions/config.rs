//! Command line configuration.

#[cfg(test)]
#[path = "../../tests/unit/extensions/config_test.rs"]
mod config_test;

use relief_core::models::common::Timestamp;
use relief_core::prediction::TrainingConfig;
use relief_pragmatic::format::problem::ReadingOptions;
use relief_pragmatic::{now_time, parse_time};
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::path::PathBuf;

/// A default path to delay model file.
pub const DEFAULT_MODEL_PATH: &str = "delay_model.json";

/// A default logging level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// A command line configuration, every section is optional.
#[derive(Clone, Deserialize, Debug, Default)]
pub struct Config {
    /// Specifies delay model configuration.
    pub model: Option<ModelConfig>,
    /// Specifies route construction configuration.
    pub routing: Option<RoutingConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
}

/// A delay model configuration.
#[derive(Clone, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ModelConfig {
    /// A path to model file.
    pub path: Option<String>,
    /// A seed used to generate training data.
    pub seed: Option<u64>,
    /// Amount of training samples.
    pub samples: Option<usize>,
    /// Forces retraining even if model file exists.
    pub retrain: Option<bool>,
}

/// A route construction configuration.
#[derive(Clone, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RoutingConfig {
    /// A maximum amount of destinations in one request.
    pub max_destinations: Option<usize>,
    /// A time in RFC3339 format at which closures are evaluated. Current time by default.
    pub closures_at: Option<String>,
}

/// A telemetry configuration.
#[derive(Clone, Deserialize, Debug, Default)]
pub struct TelemetryConfig {
    /// Specifies logging configuration.
    pub logging: Option<LoggingConfig>,
}

/// A logging configuration.
#[derive(Clone, Deserialize, Debug)]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled.
    pub enabled: bool,
    /// A log level filter, e.g. `info` or `debug`.
    pub level: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { enabled: true, level: Some(DEFAULT_LOG_LEVEL.to_string()) }
    }
}

impl Config {
    /// Returns a path to delay model file.
    pub fn get_model_path(&self) -> PathBuf {
        PathBuf::from(self.model.as_ref().and_then(|model| model.path.as_deref()).unwrap_or(DEFAULT_MODEL_PATH))
    }

    /// Returns training configuration.
    pub fn get_training_config(&self) -> TrainingConfig {
        let defaults = TrainingConfig::default();
        let model = self.model.as_ref();

        TrainingConfig {
            seed: model.and_then(|model| model.seed).unwrap_or(defaults.seed),
            samples: model.and_then(|model| model.samples).unwrap_or(defaults.samples),
        }
    }

    /// Returns true if model has to be retrained regardless of stored one.
    pub fn should_retrain(&self) -> bool {
        self.model.as_ref().and_then(|model| model.retrain).unwrap_or(false)
    }

    /// Returns route request reading options.
    pub fn get_reading_options(&self) -> ReadingOptions {
        let defaults = ReadingOptions::default();

        ReadingOptions {
            max_destinations: self
                .routing
                .as_ref()
                .and_then(|routing| routing.max_destinations)
                .unwrap_or(defaults.max_destinations),
        }
    }

    /// Returns a time at which closures are evaluated.
    pub fn get_closures_time(&self) -> Result<Timestamp, String> {
        match self.routing.as_ref().and_then(|routing| routing.closures_at.as_deref()) {
            Some(time) => parse_time(time).map_err(|err| format!("cannot parse closures time '{time}': '{err}'")),
            None => Ok(now_time()),
        }
    }

    /// Returns logging configuration.
    pub fn get_logging(&self) -> LoggingConfig {
        self.telemetry.as_ref().and_then(|telemetry| telemetry.logging.clone()).unwrap_or_default()
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}
