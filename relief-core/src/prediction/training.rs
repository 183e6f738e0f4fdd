#[cfg(test)]
#[path = "../../tests/unit/prediction/training_test.rs"]
mod training_test;

use super::{DelayFeatures, DelayModel, FEATURE_COUNT, get_rule_based_delay};
use crate::algorithms::math::solve_normal_equation;
use crate::utils::{DefaultRandom, GenericResult, Random};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// A seed used to generate synthetic training data by default.
pub const DEFAULT_TRAINING_SEED: u64 = 42;

/// Amount of synthetic samples used by default.
pub const DEFAULT_TRAINING_SAMPLES: usize = 2000;

/// Specifies how the delay model is trained.
#[derive(Clone, Debug)]
pub struct TrainingConfig {
    /// A seed of the generator which produces synthetic samples.
    pub seed: u64,
    /// Amount of synthetic samples.
    pub samples: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self { seed: DEFAULT_TRAINING_SEED, samples: DEFAULT_TRAINING_SAMPLES }
    }
}

/// Generates synthetic samples labeled with rule based delay.
pub fn generate_training_data(random: &dyn Random, samples: usize) -> (Vec<DelayFeatures>, Vec<f64>) {
    let features = (0..samples)
        .map(|_| DelayFeatures {
            visibility: random.uniform_int(500, 12_000) as f64,
            wind_speed: random.uniform_real(0., 20.),
            precipitation: random.uniform_real(0., 25.),
            temperature: random.uniform_real(-10., 35.),
            traffic_load: random.uniform_real(0., 1.),
            road_type_factor: random.uniform_real(0.5, 1.5),
        })
        .collect::<Vec<_>>();

    let labels = features.iter().map(get_rule_based_delay).collect();

    (features, labels)
}

/// Fits linear model using least squares on intercept augmented design matrix.
/// Returns bias and weights.
pub fn fit_linear_model(features: &[DelayFeatures], labels: &[f64]) -> GenericResult<(f64, [f64; FEATURE_COUNT])> {
    let design = features
        .iter()
        .map(|features| std::iter::once(1.).chain(features.to_vector()).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    let solution = solve_normal_equation(&design, labels)?;

    let bias = solution[0];
    let weights: [f64; FEATURE_COUNT] = solution[1..]
        .try_into()
        .map_err(|_| format!("expected {} weights, got {}", FEATURE_COUNT, solution.len() - 1))?;

    Ok((bias, weights))
}

/// Trains delay model on synthetic data generated with a locally scoped seeded generator.
pub fn train_delay_model(config: &TrainingConfig) -> GenericResult<DelayModel> {
    let random = DefaultRandom::new_with_seed(config.seed);
    let (features, labels) = generate_training_data(&random, config.samples);

    let (bias, weights) = fit_linear_model(&features, &labels)?;
    let trained_at =
        OffsetDateTime::now_utc().format(&Rfc3339).map_err(|err| format!("cannot format training time: '{err}'"))?;

    Ok(DelayModel::new(weights, bias, trained_at))
}
