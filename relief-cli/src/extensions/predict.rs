//! Creates delay predictor and estimates road delays from pragmatic json input.

#[cfg(test)]
#[path = "../../tests/unit/extensions/predict_test.rs"]
mod predict_test;

use super::config::Config;
use relief_core::models::common::Timestamp;
use relief_core::prediction::{DelayPredictor, JsonFileStore, ModelStore, TrainingConfig};
use relief_core::utils::{Environment, round_to};
use relief_pragmatic::format::MultiFormatError;
use relief_pragmatic::format::forecast::{
    ForecastPrediction, create_forecast, deserialize_delay_features, deserialize_forecast_requests,
};
use serde::Serialize;
use std::io::{BufReader, Read};

/// A delay estimated from one feature mapping.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DelayEstimate {
    /// Estimated delay in minutes.
    pub estimated_delay: f64,
}

/// Creates a predictor using model store and training settings from config. A stored model is
/// reused unless retraining is requested.
pub fn create_predictor(config: &Config, environment: Environment) -> Result<DelayPredictor, String> {
    let store = JsonFileStore::new(config.get_model_path());
    let training = config.get_training_config();

    if config.should_retrain() {
        train_predictor(&store, &training, environment)
    } else {
        DelayPredictor::init(&store, &training, environment).map_err(|err| err.to_string())
    }
}

/// Trains a new model and persists it, failure to persist is an error.
pub fn train_predictor(
    store: &dyn ModelStore,
    training: &TrainingConfig,
    environment: Environment,
) -> Result<DelayPredictor, String> {
    let mut predictor = DelayPredictor::new_rule_based(environment);
    predictor.retrain(store, training).map_err(|err| err.to_string())?;

    Ok(predictor)
}

/// Estimates delays for one feature mapping or a list of them.
pub fn predict_delays<R: Read>(
    reader: BufReader<R>,
    predictor: &DelayPredictor,
) -> Result<Vec<DelayEstimate>, MultiFormatError> {
    let features = deserialize_delay_features(reader)?.into_vec();

    Ok(predictor
        .predict_many(features.as_slice())
        .into_iter()
        .map(|delay| DelayEstimate { estimated_delay: round_to(delay, 2) })
        .collect())
}

/// Creates road delay forecasts, requests without timestamp use `time`.
pub fn forecast_delays<R: Read>(
    reader: BufReader<R>,
    predictor: &DelayPredictor,
    time: Timestamp,
) -> Result<Vec<ForecastPrediction>, MultiFormatError> {
    let requests = deserialize_forecast_requests(reader)?;

    let (forecasts, errors): (Vec<_>, Vec<_>) =
        requests.iter().map(|request| create_forecast(request, predictor, time)).partition(Result::is_ok);

    if errors.is_empty() {
        Ok(forecasts.into_iter().filter_map(Result::ok).collect())
    } else {
        Err(errors.into_iter().filter_map(Result::err).flat_map(|err| err.errors).collect::<Vec<_>>().into())
    }
}
