#[cfg(test)]
#[path = "../../../tests/unit/format/solution/writer_test.rs"]
mod writer_test;

use super::*;
use relief_core::utils::round_to;

/// Creates route response from the route. Metrics are rounded to 2 decimals and risk score to 3.
///
/// `sequence` distinguishes routes built from the same origin and becomes part of the route id.
pub fn create_route_response(route: &OptimizedRoute, sequence: usize) -> RouteResponse {
    let origin_lat = route.waypoints.first().map_or(0., |origin| origin.latitude);

    let stops = route
        .waypoints
        .iter()
        .enumerate()
        .map(|(idx, &point)| Stop {
            stop_id: idx + 1,
            coordinates: point.into(),
            stop_type: if idx == 0 { StopType::Origin } else { StopType::Pickup },
        })
        .collect();

    RouteResponse {
        route_id: format!("route_{sequence}_{origin_lat:.3}"),
        nodes: route.waypoints.iter().map(|&point| Location::from(point)).collect(),
        stops,
        total_distance_km: round_to(route.total_distance_km, 2),
        estimated_duration_min: round_to(route.estimated_duration_min, 2),
        total_penalty: round_to(route.total_penalty, 2),
        closure_avoided_count: route.closures_avoided_count,
        weather_penalty_total: round_to(route.weather_penalty_total, 2),
        risk_score: round_to(route.risk_score, 3),
        algorithm_id: route.algorithm_id.clone(),
    }
}

/// A trait to serialize route in pragmatic format.
pub trait PragmaticSolution<W: Write> {
    /// Serializes route in pragmatic json format.
    fn write_pragmatic_json(&self, sequence: usize, writer: BufWriter<W>) -> Result<(), String>;
}

impl<W: Write> PragmaticSolution<W> for OptimizedRoute {
    fn write_pragmatic_json(&self, sequence: usize, writer: BufWriter<W>) -> Result<(), String> {
        let response = create_route_response(self, sequence);
        serialize_route_response(writer, &response).map_err(|err| err.to_string())
    }
}
