/// Represents a time in seconds since unix epoch.
pub type Timestamp = f64;

/// Represents a geographic coordinate in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a new instance of `GeoPoint`.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Checks whether the other point lies inside a square box of given half side in degrees
    /// around this one. Box borders are exclusive.
    pub fn is_within_box(&self, other: &GeoPoint, half_side: f64) -> bool {
        (self.latitude - other.latitude).abs() < half_side && (self.longitude - other.longitude).abs() < half_side
    }
}
