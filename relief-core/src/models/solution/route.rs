use crate::models::common::GeoPoint;

/// An id of the algorithm which builds routes.
pub const GREEDY_ALGORITHM_ID: &str = "greedy_nearest_neighbor_with_penalties";

/// An ordered delivery route with its metrics.
#[derive(Clone, Debug, PartialEq)]
pub struct OptimizedRoute {
    /// Visited points, origin goes first followed by each destination exactly once.
    pub waypoints: Vec<GeoPoint>,
    /// A sum of unpenalized leg distances in kilometers.
    pub total_distance_km: f64,
    /// An estimated travel duration in minutes.
    pub estimated_duration_min: f64,
    /// Accumulated leg penalties above the unencumbered baseline.
    pub total_penalty: f64,
    /// Amount of legs whose penalty indicates closure proximity.
    pub closures_avoided_count: usize,
    /// Accumulated moderate penalties attributed to weather.
    pub weather_penalty_total: f64,
    /// A bounded risk score in [0, 1].
    pub risk_score: f64,
    /// An algorithm id.
    pub algorithm_id: String,
}

impl OptimizedRoute {
    /// Creates a route which consists of the origin only, all metrics are zero.
    pub fn new_trivial(origin: GeoPoint, risk_score: f64) -> Self {
        Self {
            waypoints: vec![origin],
            total_distance_km: 0.,
            estimated_duration_min: 0.,
            total_penalty: 0.,
            closures_avoided_count: 0,
            weather_penalty_total: 0.,
            risk_score,
            algorithm_id: GREEDY_ALGORITHM_ID.to_string(),
        }
    }

    /// Returns amount of waypoints including origin.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Returns true if route has no waypoints at all.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }
}
