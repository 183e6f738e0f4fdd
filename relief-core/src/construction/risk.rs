#[cfg(test)]
#[path = "../../tests/unit/construction/risk_test.rs"]
mod risk_test;

use crate::models::common::GeoPoint;
use crate::utils::round_to;

/// Derives a bounded risk score from route shape and optimization flags.
///
/// The score is a structural placeholder: it reflects only route length and which optimizations
/// were requested, not measured hazard data.
#[derive(Clone, Debug)]
pub struct RiskScorer {
    base_risk: f64,
    closures_risk: f64,
    weather_risk: f64,
    per_waypoint_risk: f64,
    max_length_risk: f64,
}

impl Default for RiskScorer {
    fn default() -> Self {
        Self { base_risk: 0.1, closures_risk: 0.2, weather_risk: 0.1, per_waypoint_risk: 0.05, max_length_risk: 0.3 }
    }
}

impl RiskScorer {
    /// Returns risk score in [0, 1] rounded to 3 decimals.
    pub fn score(&self, waypoints: &[GeoPoint], avoid_closures: bool, optimize_for_weather: bool) -> f64 {
        let mut risk = self.base_risk;

        if avoid_closures {
            risk += self.closures_risk;
        }

        if optimize_for_weather {
            risk += self.weather_risk;
        }

        risk += (waypoints.len() as f64 * self.per_waypoint_risk).min(self.max_length_risk);

        round_to(risk.clamp(0., 1.), 3)
    }
}
