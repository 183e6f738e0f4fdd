//! The prediction module contains a road delay estimator: a linear regression trained on
//! synthetic samples labeled by a rule based ground truth.

mod features;
pub use self::features::*;

mod model;
pub use self::model::*;

mod predictor;
pub use self::predictor::*;

mod rules;
pub use self::rules::*;

mod store;
pub use self::store::*;

mod training;
pub use self::training::*;
