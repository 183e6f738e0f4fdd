//! Core crate contains the main building blocks to plan relief deliveries: a penalty aware greedy
//! route construction and a road delay estimator.
//!
//! # Route construction
//!
//! A route starts at the origin and repeatedly moves to the cheapest remaining destination where
//! the cost of a leg is its haversine distance multiplied by a penalty factor. The factor grows
//! with bad weather and with proximity to active road closures, so risky destinations are visited
//! later. The heuristic has no optimality guarantee, it is deterministic and quadratic in the
//! amount of destinations.
//!
//! ```
//! # use relief_core::prelude::*;
//! let request = RouteRequest {
//!     origin: GeoPoint::new(0., 0.),
//!     destinations: vec![GeoPoint::new(0., 1.), GeoPoint::new(1., 0.)],
//!     avoid_closures: false,
//!     optimize_for_weather: false,
//! };
//!
//! let route = RouteBuilder::default().build(&request, &[], &NoWeather);
//!
//! assert_eq!(route.waypoints.len(), 3);
//! assert_eq!(route.waypoints[1], GeoPoint::new(0., 1.));
//! ```
//!
//! # Delay estimation
//!
//! [`prediction::DelayPredictor`] is a linear regression over six weather and traffic features.
//! It is trained on synthetic samples labeled by [`prediction::get_rule_based_delay`] which also
//! serves as a fallback when no trained parameters are available.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod construction;
pub mod models;
pub mod prediction;
pub mod prelude;
pub mod utils;
