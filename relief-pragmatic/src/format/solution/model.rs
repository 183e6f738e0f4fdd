use crate::format::Location;
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Error, Read, Write};

/// A stop type.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StopType {
    /// A route start.
    Origin,
    /// A destination where relief goods are picked up or handed over.
    Pickup,
}

/// A scheduled stop on the route.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    /// A stop number starting from 1.
    pub stop_id: usize,
    /// A stop location.
    pub coordinates: Location,
    /// A stop type.
    #[serde(rename = "type")]
    pub stop_type: StopType,
}

/// An optimized route in pragmatic format.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteResponse {
    /// A route id.
    pub route_id: String,
    /// Route waypoints, the origin goes first.
    pub nodes: Vec<Location>,
    /// Scheduled stops.
    pub stops: Vec<Stop>,
    /// Total distance in km.
    pub total_distance_km: f64,
    /// Estimated duration in minutes.
    pub estimated_duration_min: f64,
    /// Accumulated leg penalties above the baseline.
    pub total_penalty: f64,
    /// Amount of legs affected by closure proximity.
    pub closure_avoided_count: usize,
    /// Accumulated weather penalty.
    pub weather_penalty_total: f64,
    /// A risk score in [0, 1].
    pub risk_score: f64,
    /// An algorithm id.
    pub algorithm_id: String,
}

/// Serializes route response into json format.
pub fn serialize_route_response<W: Write>(writer: BufWriter<W>, response: &RouteResponse) -> Result<(), Error> {
    serde_json::to_writer_pretty(writer, response).map_err(Error::from)
}

/// Deserializes route response from json format.
pub fn deserialize_route_response<R: Read>(reader: BufReader<R>) -> Result<RouteResponse, Error> {
    serde_json::from_reader(reader).map_err(Error::from)
}
