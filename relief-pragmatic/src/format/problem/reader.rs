use super::*;
use crate::validation::{ValidationContext, check_e0004_closure_times};
use relief_core::models::common::GeoPoint;

pub(super) fn map_to_route_problem(
    request: RouteRequest,
    options: &ReadingOptions,
) -> Result<RouteProblem, MultiFormatError> {
    let validated = ValidationContext::new(&request, options.max_destinations).validate();
    let closures = read_closures(request.closures.as_deref().unwrap_or(&[]));

    let closures = match (validated, closures) {
        (Ok(_), Ok(closures)) => closures,
        (validated, closures) => {
            let errors = validated.err().into_iter().chain(closures.err()).flat_map(|errors| errors.errors);
            return Err(errors.collect::<Vec<_>>().into());
        }
    };

    let weather = request.weather.as_ref().map(WeatherSnapshot::from);

    Ok(RouteProblem {
        request: CoreRouteRequest {
            origin: request.origin.into(),
            destinations: request.destinations.iter().map(|&location| GeoPoint::from(location)).collect(),
            avoid_closures: request.avoid_closures,
            optimize_for_weather: request.optimize_for_weather,
        },
        closures: StaticClosures::new(closures),
        weather,
    })
}

/// Validates closure times and maps closures to the core model.
pub fn read_closures(closures: &[Closure]) -> Result<Vec<ClosureRecord>, MultiFormatError> {
    let windows = check_e0004_closure_times(closures)?;

    Ok(closures
        .iter()
        .zip(windows)
        .map(|(closure, active)| ClosureRecord {
            id: closure.id,
            severity: closure.severity,
            coordinates: closure.coordinates.iter().map(|&location| location.into()).collect(),
            active,
        })
        .collect())
}
