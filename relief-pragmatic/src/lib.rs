//! Pragmatic crate exposes relief route construction and road delay estimation via simple
//! **pragmatic** json format.
//!
//! A route request is read with [`format::problem::read_route_problem`], which deserializes and
//! validates the json, and built into a route using [`relief_core::construction::RouteBuilder`]:
//!
//! ```
//! # use relief_pragmatic::core::prelude::*;
//! # use relief_pragmatic::format::problem::*;
//! # use relief_pragmatic::format::solution::*;
//! # use std::io::BufReader;
//! let json = r#"{
//!   "origin": { "lat": 0.0, "lng": 0.0 },
//!   "destinations": [{ "lat": 0.0, "lng": 1.0 }, { "lat": 1.0, "lng": 0.0 }],
//!   "avoidClosures": false,
//!   "optimizeForWeather": false
//! }"#;
//!
//! let problem = read_route_problem(BufReader::new(json.as_bytes()), &ReadingOptions::default())
//!     .expect("cannot read problem");
//! let route = problem.solve(&RouteBuilder::default(), 0.);
//! let response = create_route_response(&route, 1);
//!
//! assert_eq!(response.route_id, "route_1_0.000");
//! assert_eq!(response.total_distance_km, 268.44);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/generator/mod.rs"]
pub mod generator;

#[cfg(test)]
#[path = "../tests/discovery/mod.rs"]
pub mod discovery;

pub use relief_core as core;

mod validation;

pub mod format;

use relief_core::models::common::Timestamp;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Formats unix timestamp in seconds as RFC3339 string.
pub fn format_time(time: Timestamp) -> Result<String, String> {
    OffsetDateTime::from_unix_timestamp(time as i64)
        .map_err(|err| err.to_string())?
        .format(&Rfc3339)
        .map_err(|err| err.to_string())
}

/// Parses RFC3339 string into unix timestamp in seconds.
pub fn parse_time(time: &str) -> Result<Timestamp, String> {
    OffsetDateTime::parse(time, &Rfc3339).map(|time| time.unix_timestamp() as Timestamp).map_err(|err| err.to_string())
}

/// Returns current time as unix timestamp in seconds.
pub fn now_time() -> Timestamp {
    OffsetDateTime::now_utc().unix_timestamp() as Timestamp
}
