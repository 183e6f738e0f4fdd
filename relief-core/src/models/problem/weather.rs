use crate::models::common::GeoPoint;

/// Weather conditions observed at some point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeatherSnapshot {
    /// Visibility in meters.
    pub visibility: f64,
    /// Wind speed in m/s.
    pub wind_speed: f64,
    /// Precipitation in mm/h.
    pub precipitation: f64,
    /// Temperature in Celsius.
    pub temperature: f64,
}

impl Default for WeatherSnapshot {
    /// Returns clear weather which produces no penalties.
    fn default() -> Self {
        Self { visibility: 10_000., wind_speed: 0., precipitation: 0., temperature: 20. }
    }
}

/// Supplies weather conditions for a point.
pub trait WeatherProvider {
    /// Returns weather at the point, `None` when unknown.
    fn get_weather(&self, point: &GeoPoint) -> Option<WeatherSnapshot>;
}

/// A weather provider which knows nothing.
pub struct NoWeather;

impl WeatherProvider for NoWeather {
    fn get_weather(&self, _: &GeoPoint) -> Option<WeatherSnapshot> {
        None
    }
}

/// A weather provider which returns the same snapshot everywhere.
pub struct FixedWeather(pub WeatherSnapshot);

impl WeatherProvider for FixedWeather {
    fn get_weather(&self, _: &GeoPoint) -> Option<WeatherSnapshot> {
        Some(self.0)
    }
}

impl<F> WeatherProvider for F
where
    F: Fn(&GeoPoint) -> Option<WeatherSnapshot>,
{
    fn get_weather(&self, point: &GeoPoint) -> Option<WeatherSnapshot> {
        self(point)
    }
}
