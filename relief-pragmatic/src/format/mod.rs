//! This module defines logic to serialize/deserialize route requests, closures, weather and delay
//! features in pragmatic format from json input and to write routes and forecasts back.

#[cfg(test)]
#[path = "../../tests/unit/format/format_test.rs"]
mod format_test;

use relief_core::models::common::GeoPoint;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod algorithms;
pub mod forecast;
pub mod problem;
pub mod solution;

/// Represents a location as geocoordinate with latitude and longitude.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
pub struct Location {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

impl Location {
    /// Creates a new instance of `Location`.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<Location> for GeoPoint {
    fn from(location: Location) -> Self {
        GeoPoint::new(location.lat, location.lng)
    }
}

impl From<GeoPoint> for Location {
    fn from(point: GeoPoint) -> Self {
        Location::new(point.latitude, point.longitude)
    }
}

/// A format error.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct FormatError {
    /// An error code in registry.
    pub code: String,
    /// A possible error cause.
    pub cause: String,
    /// An action to take in order to recover from error.
    pub action: String,
    /// A details about exception.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl FormatError {
    /// Creates a new instance of `FormatError` action without details.
    pub fn new(code: String, cause: String, action: String) -> Self {
        Self { code, cause, action, details: None }
    }

    /// Creates a new instance of `FormatError` action.
    pub fn new_with_details(code: String, cause: String, action: String, details: String) -> Self {
        Self { code, cause, action, details: Some(details) }
    }

    /// Serializes error into json string.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| self.to_string())
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, cause: '{}', action: '{}'.", self.code, self.cause, self.action)
    }
}

impl std::error::Error for FormatError {}

/// A collection of format errors.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiFormatError {
    /// Inner errors.
    pub errors: Vec<FormatError>,
}

impl MultiFormatError {
    /// Formats multiple format errors into json string.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.errors).unwrap_or_else(|_| self.to_string())
    }

    /// Returns codes of inner errors.
    pub fn codes(&self) -> Vec<&str> {
        self.errors.iter().map(|err| err.code.as_str()).collect()
    }
}

impl fmt::Display for MultiFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.errors.iter().map(|err| err.to_string()).collect::<Vec<_>>().join("\n"))
    }
}

impl std::error::Error for MultiFormatError {}

impl From<Vec<FormatError>> for MultiFormatError {
    fn from(errors: Vec<FormatError>) -> Self {
        Self { errors }
    }
}

impl From<FormatError> for MultiFormatError {
    fn from(error: FormatError) -> Self {
        Self { errors: vec![error] }
    }
}

/// Creates a deserialization error with given code.
pub(crate) fn create_deserialize_error(code: &str, what: &str, err: serde_json::Error) -> MultiFormatError {
    FormatError::new(code.to_string(), format!("cannot deserialize {what}"), format!("check input json: '{err}'"))
        .into()
}
