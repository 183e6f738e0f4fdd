use super::*;

fn features(
    visibility: f64,
    wind_speed: f64,
    precipitation: f64,
    temperature: f64,
    traffic_load: f64,
) -> DelayFeatures {
    DelayFeatures { visibility, wind_speed, precipitation, temperature, traffic_load, road_type_factor: 1. }
}

parameterized_test! {can_calculate_rule_based_delay, (features, expected), {
    assert_approx!(get_rule_based_delay(&features), expected);
}}

can_calculate_rule_based_delay! {
    case01_clear: (features(10_000., 0., 0., 15., 0.), 0.),
    case02_poor_visibility: (features(1000., 0., 0., 15., 0.), 20.),
    case03_zero_visibility: (features(0., 0., 0., 15., 0.), 40.),
    case04_reduced_visibility: (features(2500., 0., 0., 15., 0.), 10.),
    case05_visibility_at_threshold: (features(5000., 0., 0., 15., 0.), 0.),
    case06_strong_wind: (features(10_000., 15.5, 0., 15., 0.), 15.),
    case07_moderate_wind: (features(10_000., 12., 0., 15., 0.), 10.),
    case08_wind_at_threshold: (features(10_000., 10., 0., 15., 0.), 0.),
    case09_heavy_precipitation: (features(10_000., 0., 11., 15., 0.), 25.),
    case10_light_precipitation: (features(10_000., 0., 3., 15., 0.), 10.),
    case11_freezing: (features(10_000., 0., 0., -1., 0.), 20.),
    case12_hot: (features(10_000., 0., 0., 31., 0.), 10.),
    case13_full_traffic: (features(10_000., 0., 0., 15., 1.), 30.),
    case14_everything: (features(0., 20., 20., -5., 1.), 120.),
}

#[test]
fn can_scale_delay_by_road_type_factor() {
    let local_road = DelayFeatures { road_type_factor: 0.5, ..features(1000., 12., 0., 15., 0.) };

    assert_approx!(get_rule_based_delay(&local_road), 15.);
}

#[test]
fn can_clamp_delay_to_bounds() {
    let extreme = DelayFeatures { road_type_factor: 1.5, ..features(0., 20., 25., -10., 1.) };
    let negative = DelayFeatures { road_type_factor: -1., ..features(1000., 0., 0., 15., 0.) };

    assert_eq!(get_rule_based_delay(&extreme), MAX_DELAY_MINUTES);
    assert_eq!(get_rule_based_delay(&negative), 0.);
}
