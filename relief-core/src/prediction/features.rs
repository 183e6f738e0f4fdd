#[cfg(test)]
#[path = "../../tests/unit/prediction/features_test.rs"]
mod features_test;

use rustc_hash::FxHashMap;

/// Amount of features used by delay model.
pub const FEATURE_COUNT: usize = 6;

/// Feature names in the order used by delay model. The order is part of model artifact contract.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] =
    ["visibility", "wind_speed", "precipitation", "temperature", "traffic_load", "road_type_factor"];

/// A raw feature mapping as received from collaborators.
pub type FeatureMap = FxHashMap<String, f64>;

/// Weather and traffic conditions on a road.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DelayFeatures {
    /// Visibility in meters.
    pub visibility: f64,
    /// Wind speed in m/s.
    pub wind_speed: f64,
    /// Precipitation in mm/h.
    pub precipitation: f64,
    /// Temperature in Celsius.
    pub temperature: f64,
    /// Normalized traffic load in [0, 1].
    pub traffic_load: f64,
    /// Road type adjustment: highway is 1., local roads are lower.
    pub road_type_factor: f64,
}

impl Default for DelayFeatures {
    /// Returns neutral conditions: clear weather, no traffic, a highway.
    fn default() -> Self {
        Self {
            visibility: 10_000.,
            wind_speed: 0.,
            precipitation: 0.,
            temperature: 20.,
            traffic_load: 0.,
            road_type_factor: 1.,
        }
    }
}

impl DelayFeatures {
    /// Creates features from the ordered vector.
    pub fn from_vector(values: [f64; FEATURE_COUNT]) -> Self {
        let [visibility, wind_speed, precipitation, temperature, traffic_load, road_type_factor] = values;

        Self { visibility, wind_speed, precipitation, temperature, traffic_load, road_type_factor }
    }

    /// Returns features as a vector in [`FEATURE_NAMES`] order.
    pub fn to_vector(&self) -> [f64; FEATURE_COUNT] {
        [
            self.visibility,
            self.wind_speed,
            self.precipitation,
            self.temperature,
            self.traffic_load,
            self.road_type_factor,
        ]
    }

    /// Creates features from the mapping. Returns names of absent features as error.
    pub fn try_from_map(map: &FeatureMap) -> Result<Self, Vec<&'static str>> {
        let missing = FEATURE_NAMES.iter().filter(|name| !map.contains_key(**name)).copied().collect::<Vec<_>>();

        if missing.is_empty() { Ok(Self::from_map_or_neutral(map)) } else { Err(missing) }
    }

    /// Creates features from the mapping replacing absent features with neutral values.
    pub fn from_map_or_neutral(map: &FeatureMap) -> Self {
        let mut values = Self::default().to_vector();

        FEATURE_NAMES.iter().zip(values.iter_mut()).for_each(|(name, value)| {
            if let Some(actual) = map.get(*name) {
                *value = *actual;
            }
        });

        Self::from_vector(values)
    }

    /// Returns features as a mapping.
    pub fn to_map(&self) -> FeatureMap {
        FEATURE_NAMES.iter().zip(self.to_vector()).map(|(name, value)| (name.to_string(), value)).collect()
    }
}
