#[cfg(test)]
#[path = "../../../tests/unit/format/problem/model_test.rs"]
mod model_test;

use crate::format::{Location, MultiFormatError, create_deserialize_error};
use relief_core::models::problem::WeatherSnapshot;
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Read};

fn default_true() -> bool {
    true
}

/// A route request: an origin and destinations to visit once.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    /// A start location.
    pub origin: Location,
    /// Locations to visit.
    pub destinations: Vec<Location>,
    /// Postpone destinations close to active closures, true by default.
    #[serde(default = "default_true", alias = "avoid_closures")]
    pub avoid_closures: bool,
    /// Postpone destinations with bad weather, true by default.
    #[serde(default = "default_true", alias = "optimize_for_weather")]
    pub optimize_for_weather: bool,
    /// Known road closures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closures: Option<Vec<Closure>>,
    /// Weather conditions in the area.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<Weather>,
}

/// A road closure.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Closure {
    /// A closure id.
    pub id: i64,
    /// A severity level in range 1..5.
    pub severity: u8,
    /// Affected coordinates.
    pub coordinates: Vec<Location>,
    /// A start time in RFC3339 format.
    #[serde(alias = "start_time")]
    pub start_time: String,
    /// An estimated end time in RFC3339 format, absent when unknown.
    #[serde(default, alias = "end_time", alias = "estimatedEndTime", skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// A free text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// A closure type, e.g. flood or landslide.
    #[serde(default, alias = "closure_type", skip_serializing_if = "Option::is_none")]
    pub closure_type: Option<String>,
}

/// Weather conditions, absent values are treated as clear weather.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Weather {
    /// Visibility in meters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
    /// Wind speed in m/s.
    #[serde(default, alias = "wind_speed", skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<f64>,
    /// Precipitation in mm/h.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precipitation: Option<f64>,
    /// Temperature in Celsius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

impl From<&Weather> for WeatherSnapshot {
    fn from(weather: &Weather) -> Self {
        let clear = WeatherSnapshot::default();

        WeatherSnapshot {
            visibility: weather.visibility.unwrap_or(clear.visibility),
            wind_speed: weather.wind_speed.unwrap_or(clear.wind_speed),
            precipitation: weather.precipitation.unwrap_or(clear.precipitation),
            temperature: weather.temperature.unwrap_or(clear.temperature),
        }
    }
}

/// Deserializes route request in json format from `BufReader`.
pub fn deserialize_route_request<R: Read>(reader: BufReader<R>) -> Result<RouteRequest, MultiFormatError> {
    serde_json::from_reader(reader).map_err(|err| create_deserialize_error("E0000", "route request", err))
}

/// Deserializes json list of closures from `BufReader`.
pub fn deserialize_closures<R: Read>(reader: BufReader<R>) -> Result<Vec<Closure>, MultiFormatError> {
    serde_json::from_reader(reader).map_err(|err| create_deserialize_error("E0001", "closures", err))
}
