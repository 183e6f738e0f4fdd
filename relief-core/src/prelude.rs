//! This module reimports commonly used types.

pub use crate::construction::{PenaltyModel, RiskScorer, RouteBuilder};

pub use crate::models::common::{GeoPoint, Timestamp, get_haversine_distance};
pub use crate::models::problem::{
    ActiveWindow, ClosureProvider, ClosureRecord, FixedWeather, NoWeather, RouteRequest, StaticClosures,
    WeatherProvider, WeatherSnapshot,
};
pub use crate::models::solution::OptimizedRoute;

pub use crate::prediction::{DelayFeatures, DelayModel, DelayPredictor, ModelStore};

pub use crate::utils::{DefaultRandom, Environment, GenericError, GenericResult, InfoLogger, Random};
