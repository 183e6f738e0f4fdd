use super::*;
use crate::prediction::FEATURE_NAMES;

#[test]
fn can_generate_samples_within_ranges() {
    let random = DefaultRandom::new_with_seed(7);

    let (features, labels) = generate_training_data(&random, 500);

    assert_eq!(features.len(), 500);
    assert_eq!(labels.len(), 500);
    features.iter().zip(labels.iter()).for_each(|(features, &label)| {
        assert!((500. ..=12_000.).contains(&features.visibility));
        assert_eq!(features.visibility.fract(), 0.);
        assert!((0. ..20.).contains(&features.wind_speed));
        assert!((0. ..25.).contains(&features.precipitation));
        assert!((-10. ..35.).contains(&features.temperature));
        assert!((0. ..1.).contains(&features.traffic_load));
        assert!((0.5..1.5).contains(&features.road_type_factor));
        assert_eq!(label, get_rule_based_delay(features));
        assert!((0. ..=120.).contains(&label));
    });
}

#[test]
fn can_generate_same_samples_for_same_seed() {
    let (first, _) = generate_training_data(&DefaultRandom::new_with_seed(42), 100);
    let (second, _) = generate_training_data(&DefaultRandom::new_with_seed(42), 100);
    let (other, _) = generate_training_data(&DefaultRandom::new_with_seed(43), 100);

    assert_eq!(first, second);
    assert_ne!(first, other);
}

#[test]
fn can_recover_coefficients_of_linear_labels() {
    let random = DefaultRandom::new_with_seed(1);
    let (features, _) = generate_training_data(&random, 200);
    let expected_weights = [-0.002, 0.7, 1.3, -0.4, 25., 8.];
    let labels = features
        .iter()
        .map(|features| {
            let vector = features.to_vector();
            vector.iter().zip(expected_weights.iter()).fold(4., |acc, (value, weight)| acc + value * weight)
        })
        .collect::<Vec<_>>();

    let (bias, weights) = fit_linear_model(&features, &labels).expect("cannot fit");

    assert_approx!(bias, 4., 1e-3);
    weights.iter().zip(expected_weights.iter()).for_each(|(&actual, &expected)| assert_approx!(actual, expected, 1e-3));
}

#[test]
fn can_reject_fit_without_samples() {
    assert!(fit_linear_model(&[], &[]).is_err());
}

#[test]
fn can_train_reproducible_model() {
    let config = TrainingConfig::default();

    let first = train_delay_model(&config).expect("cannot train");
    let second = train_delay_model(&config).expect("cannot train");

    assert_eq!(config.seed, 42);
    assert_eq!(config.samples, 2000);
    assert_eq!(first.bias, second.bias);
    assert_eq!(first.weights, second.weights);
    assert!(first.validate().is_ok());
    assert_eq!(first.feature_names, FEATURE_NAMES.iter().map(|name| name.to_string()).collect::<Vec<_>>());
}

#[test]
fn can_learn_delay_trends() {
    let model = train_delay_model(&TrainingConfig::default()).expect("cannot train");
    let weight = |name: &str| model.named_weights().find(|(actual, _)| *actual == name).map(|(_, weight)| weight);

    assert!(weight("visibility").expect("no visibility") < 0.);
    assert!(weight("wind_speed").expect("no wind speed") > 0.);
    assert!(weight("precipitation").expect("no precipitation") > 0.);
    assert!(weight("traffic_load").expect("no traffic load") > 0.);
    assert!(weight("road_type_factor").expect("no road type factor") > 0.);

    let clear = DelayFeatures::default();
    let storm = DelayFeatures { visibility: 800., wind_speed: 18., precipitation: 20., traffic_load: 0.9, ..clear };
    assert!(model.evaluate(&storm) > model.evaluate(&clear));
}

#[test]
fn can_record_training_time() {
    let model = train_delay_model(&TrainingConfig { seed: 5, samples: 100 }).expect("cannot train");

    assert!(OffsetDateTime::parse(&model.trained_at, &Rfc3339).is_ok());
}

#[test]
fn can_generate_stable_first_sample_for_default_seed() {
    let (features, _) = generate_training_data(&DefaultRandom::new_with_seed(42), 1);

    assert_eq!(
        features[0].to_vector(),
        [3077., 2.9277247594757716, 19.307833240310863, 5.484133332324731, 0.7371560746401922, 1.1420518528410684]
    );
}

#[test]
fn can_train_stable_model_for_default_config() {
    let expected_bias = -26.591058184243106;
    let expected_weights = [
        -0.0013363608650918545,
        1.0461079372107982,
        1.0732906582163217,
        -0.3369542158248141,
        30.294421860229512,
        48.551933765495775,
    ];

    let model = train_delay_model(&TrainingConfig::default()).expect("cannot train");

    assert_approx!(model.bias, expected_bias, expected_bias.abs() * 1e-6);
    model
        .weights
        .iter()
        .zip(expected_weights.iter())
        .for_each(|(&actual, &expected)| assert_approx!(actual, expected, expected.abs() * 1e-6));
}
