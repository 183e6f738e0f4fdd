#[cfg(test)]
#[path = "../../tests/unit/prediction/model_test.rs"]
mod model_test;

use super::{DelayFeatures, FEATURE_COUNT, FEATURE_NAMES};
use crate::utils::GenericResult;
use serde::{Deserialize, Serialize};

/// Trained parameters of the linear delay model.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct DelayModel {
    /// Feature weights in `feature_names` order.
    pub weights: [f64; FEATURE_COUNT],
    /// An intercept.
    pub bias: f64,
    /// Feature names, must match [`FEATURE_NAMES`].
    pub feature_names: Vec<String>,
    /// A training time in RFC3339 format.
    pub trained_at: String,
}

impl DelayModel {
    /// Creates a new instance of `DelayModel` with the default feature order.
    pub fn new(weights: [f64; FEATURE_COUNT], bias: f64, trained_at: String) -> Self {
        Self { weights, bias, feature_names: FEATURE_NAMES.iter().map(|name| name.to_string()).collect(), trained_at }
    }

    /// Checks that the model can be used with features in the default order.
    pub fn validate(&self) -> GenericResult<()> {
        if self.feature_names.iter().map(String::as_str).ne(FEATURE_NAMES.iter().copied()) {
            return Err(format!(
                "model feature names [{}] do not match expected [{}]",
                self.feature_names.join(", "),
                FEATURE_NAMES.join(", ")
            )
            .into());
        }

        if !self.bias.is_finite() || self.weights.iter().any(|weight| !weight.is_finite()) {
            return Err("model parameters must be finite".into());
        }

        Ok(())
    }

    /// Evaluates the linear function, negative results are clamped to zero.
    pub fn evaluate(&self, features: &DelayFeatures) -> f64 {
        let linear =
            self.weights.iter().zip(features.to_vector()).fold(self.bias, |acc, (weight, value)| acc + weight * value);

        linear.max(0.)
    }

    /// Returns weights paired with feature names.
    pub fn named_weights(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.feature_names.iter().map(String::as_str).zip(self.weights.iter().copied())
    }
}
