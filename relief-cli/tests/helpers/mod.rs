use std::io::Write;

pub const ROUTE_REQUEST_PATH: &str = "tests/data/route.request.json";
pub const ROUTE_CLOSURES_PATH: &str = "tests/data/route.closures.json";
pub const DELAY_FEATURES_PATH: &str = "tests/data/delay.features.json";
pub const ROAD_FORECAST_PATH: &str = "tests/data/road.forecast.json";
pub const CONFIG_PATH: &str = "tests/data/config.json";

pub struct DummyWrite {}

impl Write for DummyWrite {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
