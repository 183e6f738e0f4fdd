//! Specifies logic to read delay features and forecast requests from json input and to write
//! road delay forecasts.

#[cfg(test)]
#[path = "../../tests/unit/format/forecast_test.rs"]
mod forecast_test;

use super::problem::Weather;
use super::{FormatError, MultiFormatError, create_deserialize_error};
use crate::{format_time, parse_time};
use relief_core::models::common::Timestamp;
use relief_core::models::problem::WeatherSnapshot;
use relief_core::prediction::{DelayFeatures, DelayPredictor, FeatureMap};
use relief_core::utils::round_to;
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Read};

const TRAINED_CONFIDENCE: f64 = 0.8;
const RULE_BASED_CONFIDENCE: f64 = 0.6;

/// Delay features: either one mapping or a list of mappings.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum DelayFeaturesInput {
    /// A single mapping.
    Single(FeatureMap),
    /// Many mappings.
    Many(Vec<FeatureMap>),
}

impl DelayFeaturesInput {
    /// Returns all mappings.
    pub fn into_vec(self) -> Vec<FeatureMap> {
        match self {
            Self::Single(features) => vec![features],
            Self::Many(features) => features,
        }
    }
}

/// A request to forecast delay on a road.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRequest {
    /// A road id.
    #[serde(alias = "road_id")]
    pub road_id: i64,
    /// A forecast time in RFC3339 format, current time is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Weather on the road.
    #[serde(default)]
    pub weather: Weather,
    /// Normalized traffic load in [0, 1].
    #[serde(default, alias = "traffic_load")]
    pub traffic_load: f64,
    /// Road type adjustment, 1 is a highway.
    #[serde(default, alias = "road_type_factor", skip_serializing_if = "Option::is_none")]
    pub road_type_factor: Option<f64>,
}

/// A road delay forecast.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPrediction {
    /// A road id.
    pub road_id: i64,
    /// A forecast time in RFC3339 format.
    pub timestamp: String,
    /// Estimated delay in minutes.
    pub estimated_delay: f64,
    /// A probability of delay in [0, 1].
    pub delay_probability: f64,
    /// A confidence in [0, 1].
    pub confidence: f64,
    /// A weather impact factor.
    pub weather_factor: f64,
    /// A traffic impact factor.
    pub traffic_factor: f64,
}

/// Returns weather impact factor used to estimate delay probability.
pub fn get_weather_factor(weather: &WeatherSnapshot) -> f64 {
    let mut factor = 0.;

    if weather.visibility < 5000. {
        factor += 0.4;
    } else if weather.visibility < 10_000. {
        factor += 0.2;
    }

    if weather.wind_speed > 10. {
        factor += 0.3;
    }

    if weather.precipitation > 5. {
        factor += 0.5;
    }

    if weather.temperature < 0. {
        factor += 0.3;
    }

    factor
}

/// Creates a forecast for the request at the given time.
pub fn create_forecast(
    request: &ForecastRequest,
    predictor: &DelayPredictor,
    default_time: Timestamp,
) -> Result<ForecastPrediction, MultiFormatError> {
    let timestamp = match &request.timestamp {
        Some(timestamp) => {
            parse_time(timestamp).map_err(|err| create_time_error(request.road_id, err))?;
            timestamp.clone()
        }
        None => format_time(default_time).map_err(|err| create_time_error(request.road_id, err))?,
    };

    let weather = WeatherSnapshot::from(&request.weather);
    let features = DelayFeatures {
        visibility: weather.visibility,
        wind_speed: weather.wind_speed,
        precipitation: weather.precipitation,
        temperature: weather.temperature,
        traffic_load: request.traffic_load,
        road_type_factor: request.road_type_factor.unwrap_or(1.),
    };

    let weather_factor = get_weather_factor(&weather);

    Ok(ForecastPrediction {
        road_id: request.road_id,
        timestamp,
        estimated_delay: round_to(predictor.predict_features(&features), 2),
        delay_probability: round_to((weather_factor + 0.1).min(1.), 3),
        confidence: if predictor.is_trained() { TRAINED_CONFIDENCE } else { RULE_BASED_CONFIDENCE },
        weather_factor: round_to(weather_factor, 3),
        traffic_factor: request.traffic_load,
    })
}

fn create_time_error(road_id: i64, err: String) -> MultiFormatError {
    FormatError::new_with_details(
        "E0004".to_string(),
        "invalid forecast time".to_string(),
        format!("use RFC3339 time in forecast for road '{road_id}'"),
        err,
    )
    .into()
}

/// Deserializes delay features in json format from `BufReader`.
pub fn deserialize_delay_features<R: Read>(reader: BufReader<R>) -> Result<DelayFeaturesInput, MultiFormatError> {
    serde_json::from_reader(reader).map_err(|err| create_deserialize_error("E0001", "delay features", err))
}

/// Deserializes json list of forecast requests from `BufReader`.
pub fn deserialize_forecast_requests<R: Read>(
    reader: BufReader<R>,
) -> Result<Vec<ForecastRequest>, MultiFormatError> {
    serde_json::from_reader(reader).map_err(|err| create_deserialize_error("E0001", "forecast requests", err))
}
