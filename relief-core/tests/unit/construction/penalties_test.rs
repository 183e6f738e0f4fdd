use super::*;
use crate::helpers::models::{create_closure, create_weather, point};

parameterized_test! {can_calculate_weather_penalty, (weather, expected), {
    assert_approx!(PenaltyModel::default().weather_penalty(&weather), expected);
}}

can_calculate_weather_penalty! {
    case01_clear: (create_weather(10_000., 5., 0., 20.), 0.),
    case02_low_visibility: (create_weather(4999., 5., 0., 20.), 0.5),
    case03_visibility_at_threshold: (create_weather(5000., 5., 0., 20.), 0.),
    case04_strong_wind: (create_weather(10_000., 15.1, 0., 20.), 0.3),
    case05_wind_at_threshold: (create_weather(10_000., 15., 0., 20.), 0.),
    case06_heavy_precipitation: (create_weather(10_000., 0., 10.5, 20.), 0.8),
    case07_precipitation_at_threshold: (create_weather(10_000., 0., 10., 20.), 0.),
    case08_freezing: (create_weather(10_000., 0., 0., -0.1), 0.4),
    case09_zero_temperature: (create_weather(10_000., 0., 0., 0.), 0.),
    case10_all_conditions: (create_weather(100., 20., 25., -10.), 2.),
    case11_visibility_and_freezing: (create_weather(1000., 0., 0., -5.), 0.9),
}

#[test]
fn can_detect_closure_proximity_within_box() {
    let closures = vec![create_closure(1, &[(10., 10.), (10.5, 10.5)])];
    let model = PenaltyModel::default();

    assert_eq!(model.closure_proximity_penalty(&point(10.009, 10.009), &closures), 5.);
    assert_eq!(model.closure_proximity_penalty(&point(10.495, 10.505), &closures), 5.);
    assert_eq!(model.closure_proximity_penalty(&point(10.02, 10.), &closures), 0.);
    assert_eq!(model.closure_proximity_penalty(&point(10., 10.011), &closures), 0.);
}

#[test]
fn can_apply_closure_penalty_once_for_many_matching_closures() {
    let closures = vec![create_closure(1, &[(10., 10.)]), create_closure(2, &[(10.001, 10.001)])];

    assert_eq!(PenaltyModel::default().closure_proximity_penalty(&point(10., 10.), &closures), 5.);
}

#[test]
fn can_ignore_empty_closures() {
    let closures = vec![create_closure(1, &[])];

    assert_eq!(PenaltyModel::default().closure_proximity_penalty(&point(0., 0.), &closures), 0.);
    assert_eq!(PenaltyModel::default().closure_proximity_penalty(&point(0., 0.), &[]), 0.);
}

parameterized_test! {can_combine_penalties, (has_weather, has_closures, expected), {
    can_combine_penalties_impl(has_weather, has_closures, expected);
}}

can_combine_penalties! {
    case01_nothing: (false, false, 1.),
    case02_weather_only: (true, false, 1.5),
    case03_closures_only: (false, true, 6.),
    case04_both: (true, true, 6.5),
}

fn can_combine_penalties_impl(has_weather: bool, has_closures: bool, expected: f64) {
    let weather = create_weather(3000., 0., 0., 20.);
    let closures = vec![create_closure(1, &[(0., 0.)])];

    let penalty = PenaltyModel::default().combined_penalty(
        &point(0., 0.),
        if has_weather { Some(&weather) } else { None },
        if has_closures { Some(closures.as_slice()) } else { None },
    );

    assert_approx!(penalty, expected);
}
