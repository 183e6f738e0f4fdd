//! Specifies logic to read route request, closures and weather from json input.

#[cfg(test)]
#[path = "../../../tests/unit/format/problem/reader_test.rs"]
mod reader_test;

use super::*;
use relief_core::construction::RouteBuilder;
use relief_core::models::common::Timestamp;
use relief_core::models::problem::{
    ClosureProvider, ClosureRecord, FixedWeather, NoWeather, RouteRequest as CoreRouteRequest, StaticClosures,
    WeatherSnapshot,
};
use relief_core::models::solution::OptimizedRoute;
use std::io::{BufReader, Read};

mod model;
pub use self::model::*;

mod reader;
pub use self::reader::read_closures;
use self::reader::map_to_route_problem;

/// A default limit of destinations in one request.
pub const DEFAULT_MAX_DESTINATIONS: usize = 500;

/// Specifies how route request is read.
#[derive(Clone, Debug)]
pub struct ReadingOptions {
    /// A maximum amount of destinations accepted in one request.
    pub max_destinations: usize,
}

impl Default for ReadingOptions {
    fn default() -> Self {
        Self { max_destinations: DEFAULT_MAX_DESTINATIONS }
    }
}

/// A validated route request together with the data it refers to.
pub struct RouteProblem {
    /// A core route request.
    pub request: CoreRouteRequest,
    /// Closures supplied with the request.
    pub closures: StaticClosures,
    /// Weather supplied with the request, applied to every destination.
    pub weather: Option<WeatherSnapshot>,
}

impl RouteProblem {
    /// Builds a route considering closures which are active at given time.
    pub fn solve(&self, builder: &RouteBuilder, time: Timestamp) -> OptimizedRoute {
        let closures = self.closures.get_active(time);

        match self.weather {
            Some(weather) => builder.build(&self.request, closures.as_slice(), &FixedWeather(weather)),
            None => builder.build(&self.request, closures.as_slice(), &NoWeather),
        }
    }

    /// Returns a problem which refers to closures from the request and to `closures`.
    pub fn with_closures(mut self, closures: Vec<ClosureRecord>) -> Self {
        self.closures.extend(closures);
        self
    }
}

/// Reads route problem from various sources.
pub trait PragmaticProblem {
    /// Reads and validates route request defined in pragmatic format.
    fn read_pragmatic(self, options: &ReadingOptions) -> Result<RouteProblem, MultiFormatError>;
}

impl<R: Read> PragmaticProblem for BufReader<R> {
    fn read_pragmatic(self, options: &ReadingOptions) -> Result<RouteProblem, MultiFormatError> {
        read_route_problem(self, options)
    }
}

/// Deserializes, validates and maps route request to the core model.
pub fn read_route_problem<R: Read>(
    reader: BufReader<R>,
    options: &ReadingOptions,
) -> Result<RouteProblem, MultiFormatError> {
    let request = deserialize_route_request(reader)?;

    map_to_route_problem(request, options)
}
