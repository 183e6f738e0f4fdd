//! Builds routes from pragmatic json input.

#[cfg(test)]
#[path = "../../tests/unit/extensions/optimize_test.rs"]
mod optimize_test;

use relief_core::construction::RouteBuilder;
use relief_core::models::common::Timestamp;
use relief_core::models::solution::OptimizedRoute;
use relief_pragmatic::format::MultiFormatError;
use relief_pragmatic::format::problem::{PragmaticProblem, ReadingOptions, deserialize_closures, read_closures};
use std::io::{BufReader, Read};

/// Reads route request with optional external closures and builds a route considering closures
/// active at `time`.
pub fn optimize_route<R1: Read, R2: Read>(
    request: BufReader<R1>,
    closures: Option<BufReader<R2>>,
    options: &ReadingOptions,
    time: Timestamp,
) -> Result<OptimizedRoute, MultiFormatError> {
    let problem = request.read_pragmatic(options)?;

    let problem = match closures {
        Some(closures) => {
            let closures = deserialize_closures(closures)?;
            problem.with_closures(read_closures(closures.as_slice())?)
        }
        None => problem,
    };

    log::debug!(
        "building route for {} destinations, avoid closures: {}, optimize for weather: {}",
        problem.request.destinations.len(),
        problem.request.avoid_closures,
        problem.request.optimize_for_weather
    );

    Ok(problem.solve(&RouteBuilder::default(), time))
}
