#[cfg(test)]
#[path = "../../tests/unit/prediction/predictor_test.rs"]
mod predictor_test;

use super::*;
use crate::utils::{Environment, GenericResult, parallel_collect};

/// Estimates road delay in minutes from weather and traffic features.
///
/// A predictor is created once by [`DelayPredictor::init`] and is read only afterwards, so it can
/// be shared between concurrent callers. Retraining requires exclusive access.
pub struct DelayPredictor {
    model: Option<DelayModel>,
    environment: Environment,
}

impl DelayPredictor {
    /// Creates a predictor without trained parameters: all predictions use rule based delay.
    pub fn new_rule_based(environment: Environment) -> Self {
        Self { model: None, environment }
    }

    /// Creates a predictor with given parameters.
    pub fn new_with_model(model: DelayModel, environment: Environment) -> Self {
        Self { model: Some(model), environment }
    }

    /// Loads model from the store, or trains and persists a new one when there is no usable model.
    /// Failure to persist a trained model is logged, the trained parameters are still used.
    pub fn init(store: &dyn ModelStore, config: &TrainingConfig, environment: Environment) -> GenericResult<Self> {
        let logger = environment.logger.clone();

        let model = match store.load() {
            Ok(Some(model)) => {
                (logger)(&format!("delay model trained at {} is loaded", model.trained_at));
                model
            }
            Ok(None) => {
                (logger)("no saved delay model found, training a new one");
                Self::train_and_save(store, config, &environment)?
            }
            Err(err) => {
                (logger)(&format!("cannot load delay model: '{err}', training a new one"));
                Self::train_and_save(store, config, &environment)?
            }
        };

        Ok(Self::new_with_model(model, environment))
    }

    /// Trains new parameters, replaces the current ones and persists them. When persisting fails,
    /// the new parameters are still used and the failure is returned.
    pub fn retrain(&mut self, store: &dyn ModelStore, config: &TrainingConfig) -> GenericResult<()> {
        let model = Self::train(config, &self.environment)?;
        let saved = store.save(&model);
        self.model = Some(model);

        match saved {
            Ok(_) => {
                (self.environment.logger)("delay model is saved");
                Ok(())
            }
            Err(err) => Err(format!("cannot save delay model: '{err}'").into()),
        }
    }

    /// Returns trained parameters if any.
    pub fn model(&self) -> Option<&DelayModel> {
        self.model.as_ref()
    }

    /// Returns true when predictions use trained parameters.
    pub fn is_trained(&self) -> bool {
        self.model.is_some()
    }

    /// Predicts delay from the complete set of features.
    pub fn predict_features(&self, features: &DelayFeatures) -> f64 {
        match &self.model {
            Some(model) => model.evaluate(features),
            None => get_rule_based_delay(features),
        }
    }

    /// Predicts delay from the feature mapping. When any feature is absent, logs it and falls back
    /// to rule based delay with neutral values in place of absent features.
    pub fn predict(&self, features: &FeatureMap) -> f64 {
        match DelayFeatures::try_from_map(features) {
            Ok(features) => self.predict_features(&features),
            Err(missing) => {
                (self.environment.logger)(&format!(
                    "missing features: [{}], fallback to rule based delay",
                    missing.join(", ")
                ));
                get_rule_based_delay(&DelayFeatures::from_map_or_neutral(features))
            }
        }
    }

    /// Predicts delays for many feature mappings in parallel, results keep input order.
    pub fn predict_many(&self, features: &[FeatureMap]) -> Vec<f64> {
        parallel_collect(features, |features| self.predict(features))
    }

    fn train_and_save(
        store: &dyn ModelStore,
        config: &TrainingConfig,
        environment: &Environment,
    ) -> GenericResult<DelayModel> {
        let model = Self::train(config, environment)?;

        match store.save(&model) {
            Ok(_) => (environment.logger)("delay model is saved"),
            Err(err) => (environment.logger)(&format!("cannot save delay model: '{err}'")),
        }

        Ok(model)
    }

    fn train(config: &TrainingConfig, environment: &Environment) -> GenericResult<DelayModel> {
        let logger = &environment.logger;

        (logger)(&format!("training delay model on {} samples with seed {}", config.samples, config.seed));
        let model = train_delay_model(config)?;

        let weights = model.named_weights().map(|(name, weight)| format!("{name}={weight:.4}")).collect::<Vec<_>>();
        (logger)(&format!("delay model trained, bias: {:.4}, weights: {}", model.bias, weights.join(", ")));

        Ok(model)
    }
}
