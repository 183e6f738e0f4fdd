use crate::models::common::GeoPoint;

/// Represents a request to build a delivery route.
#[derive(Clone, Debug, Default)]
pub struct RouteRequest {
    /// A route start point.
    pub origin: GeoPoint,
    /// Destinations to visit. The order is used to break ties between equally expensive candidates.
    pub destinations: Vec<GeoPoint>,
    /// Whether proximity to active road closures should penalize candidates.
    pub avoid_closures: bool,
    /// Whether weather conditions at candidates should penalize them.
    pub optimize_for_weather: bool,
}
