#[cfg(test)]
#[path = "../../../tests/unit/models/common/distance_test.rs"]
mod distance_test;

use super::GeoPoint;

/// A mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.;

/// Gets great-circle distance in kilometers between two points using haversine formula.
pub fn get_haversine_distance(p1: &GeoPoint, p2: &GeoPoint) -> f64 {
    let d_lat = (p2.latitude - p1.latitude).to_radians();
    let d_lng = (p2.longitude - p1.longitude).to_radians();

    let lat1 = p1.latitude.to_radians();
    let lat2 = p2.latitude.to_radians();

    let a = (d_lat / 2.).sin() * (d_lat / 2.).sin() + lat1.cos() * lat2.cos() * (d_lng / 2.).sin() * (d_lng / 2.).sin();
    let c = 2. * a.sqrt().atan2((1. - a).sqrt());

    EARTH_RADIUS_KM * c
}
