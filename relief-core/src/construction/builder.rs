#[cfg(test)]
#[path = "../../tests/unit/construction/builder_test.rs"]
mod builder_test;

use super::{PenaltyModel, RiskScorer};
use crate::models::common::{GeoPoint, get_haversine_distance};
use crate::models::problem::{ClosureRecord, RouteRequest, WeatherProvider};
use crate::models::solution::{GREEDY_ALGORITHM_ID, OptimizedRoute};
use crate::utils::compare_floats;
use std::cmp::Ordering;

/// A base travel speed in km/h which is reduced proportionally to accumulated penalties.
const BASE_SPEED_KMH: f64 = 50.;

/// A penalty above which a leg is attributed to closure proximity.
const CLOSURE_PENALTY_THRESHOLD: f64 = 2.;

/// Builds a route using greedy nearest neighbor selection where a leg cost is its distance
/// multiplied by the penalty of its destination.
///
/// The algorithm has quadratic complexity and no backtracking, so callers are expected to bound
/// the amount of destinations.
#[derive(Clone, Debug, Default)]
pub struct RouteBuilder {
    penalty_model: PenaltyModel,
    risk_scorer: RiskScorer,
}

/// A candidate leg from current position to one of the remaining destinations.
struct Leg {
    index: usize,
    distance: f64,
    penalty: f64,
    cost: f64,
}

/// Accumulated leg metrics.
#[derive(Default)]
struct LegTotals {
    distance: f64,
    penalty: f64,
    closures_avoided: usize,
    weather_penalty: f64,
}

impl RouteBuilder {
    /// Builds a route which starts at request origin and visits every destination exactly once.
    /// Closures are used only when avoidance is requested, weather only when weather
    /// optimization is requested.
    pub fn build(
        &self,
        request: &RouteRequest,
        closures: &[ClosureRecord],
        weather: &dyn WeatherProvider,
    ) -> OptimizedRoute {
        let origin = request.origin;

        if request.destinations.is_empty() {
            let risk_score = self.score(&[origin], request);
            return OptimizedRoute::new_trivial(origin, risk_score);
        }

        let closures = if request.avoid_closures { Some(closures) } else { None };
        let considers_closures = closures.is_some_and(|closures| !closures.is_empty());

        let mut remaining = request.destinations.clone();
        let mut waypoints = Vec::with_capacity(remaining.len() + 1);
        waypoints.push(origin);

        let mut current = origin;
        let mut totals = LegTotals::default();

        while let Some(leg) = self.select_leg(&current, remaining.as_slice(), request, closures, weather) {
            current = remaining.remove(leg.index);
            waypoints.push(current);

            totals.distance += leg.distance;
            totals.penalty += leg.penalty;

            if leg.penalty > CLOSURE_PENALTY_THRESHOLD && considers_closures {
                totals.closures_avoided += 1;
            } else if leg.penalty > 1. && leg.penalty <= CLOSURE_PENALTY_THRESHOLD {
                totals.weather_penalty += leg.penalty - 1.;
            }
        }

        let route_length = waypoints.len() as f64;
        let adjusted_speed = BASE_SPEED_KMH / (1. + totals.penalty / route_length);
        let risk_score = self.score(waypoints.as_slice(), request);

        OptimizedRoute {
            waypoints,
            total_distance_km: totals.distance,
            estimated_duration_min: (totals.distance / adjusted_speed) * 60.,
            total_penalty: totals.penalty - route_length,
            closures_avoided_count: totals.closures_avoided,
            weather_penalty_total: totals.weather_penalty,
            risk_score,
            algorithm_id: GREEDY_ALGORITHM_ID.to_string(),
        }
    }

    /// Selects the cheapest leg, the first encountered candidate wins on equal costs.
    fn select_leg(
        &self,
        current: &GeoPoint,
        remaining: &[GeoPoint],
        request: &RouteRequest,
        closures: Option<&[ClosureRecord]>,
        weather: &dyn WeatherProvider,
    ) -> Option<Leg> {
        remaining
            .iter()
            .enumerate()
            .map(|(index, destination)| {
                let distance = get_haversine_distance(current, destination);
                let weather = if request.optimize_for_weather { weather.get_weather(destination) } else { None };
                let penalty = self.penalty_model.combined_penalty(destination, weather.as_ref(), closures);

                Leg { index, distance, penalty, cost: distance * penalty }
            })
            .fold(None, |best: Option<Leg>, leg| match best {
                Some(best) if compare_floats(leg.cost, best.cost) != Ordering::Less => Some(best),
                _ => Some(leg),
            })
    }

    fn score(&self, waypoints: &[GeoPoint], request: &RouteRequest) -> f64 {
        self.risk_scorer.score(waypoints, request.avoid_closures, request.optimize_for_weather)
    }
}
