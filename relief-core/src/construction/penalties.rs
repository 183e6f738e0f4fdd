#[cfg(test)]
#[path = "../../tests/unit/construction/penalties_test.rs"]
mod penalties_test;

use crate::models::common::GeoPoint;
use crate::models::problem::{ClosureRecord, WeatherSnapshot};

const LOW_VISIBILITY_METERS: f64 = 5000.;
const LOW_VISIBILITY_PENALTY: f64 = 0.5;
const STRONG_WIND_MPS: f64 = 15.;
const STRONG_WIND_PENALTY: f64 = 0.3;
const HEAVY_PRECIPITATION_MMH: f64 = 10.;
const HEAVY_PRECIPITATION_PENALTY: f64 = 0.8;
const FREEZING_CELSIUS: f64 = 0.;
const FREEZING_PENALTY: f64 = 0.4;

/// Calculates a multiplicative cost factor for visiting a point. The factor is `1.` for a point
/// without any known hazards and grows with bad weather and closure proximity.
#[derive(Clone, Debug)]
pub struct PenaltyModel {
    /// A half side in degrees of the box around closure coordinates which is considered affected.
    pub closure_box_half_side: f64,
    /// A penalty added when a point is affected by a closure.
    pub closure_penalty: f64,
}

impl Default for PenaltyModel {
    fn default() -> Self {
        Self { closure_box_half_side: 0.01, closure_penalty: 5. }
    }
}

impl PenaltyModel {
    /// Returns weather penalty, each bad condition adds its own term.
    pub fn weather_penalty(&self, weather: &WeatherSnapshot) -> f64 {
        let mut penalty = 0.;

        if weather.visibility < LOW_VISIBILITY_METERS {
            penalty += LOW_VISIBILITY_PENALTY;
        }

        if weather.wind_speed > STRONG_WIND_MPS {
            penalty += STRONG_WIND_PENALTY;
        }

        if weather.precipitation > HEAVY_PRECIPITATION_MMH {
            penalty += HEAVY_PRECIPITATION_PENALTY;
        }

        if weather.temperature < FREEZING_CELSIUS {
            penalty += FREEZING_PENALTY;
        }

        penalty
    }

    /// Returns closure penalty if the point is close to any coordinate of any closure, zero otherwise.
    /// Proximity is a coarse bounding box check on latitude and longitude separately.
    pub fn closure_proximity_penalty(&self, point: &GeoPoint, closures: &[ClosureRecord]) -> f64 {
        let is_affected = closures
            .iter()
            .flat_map(|closure| closure.coordinates.iter())
            .any(|coordinate| coordinate.is_within_box(point, self.closure_box_half_side));

        if is_affected { self.closure_penalty } else { 0. }
    }

    /// Returns combined penalty factor: `1.` plus weather penalty when weather is given plus
    /// closure penalty when closures are given.
    pub fn combined_penalty(
        &self,
        point: &GeoPoint,
        weather: Option<&WeatherSnapshot>,
        closures: Option<&[ClosureRecord]>,
    ) -> f64 {
        1. + weather.map_or(0., |weather| self.weather_penalty(weather))
            + closures.map_or(0., |closures| self.closure_proximity_penalty(point, closures))
    }
}
