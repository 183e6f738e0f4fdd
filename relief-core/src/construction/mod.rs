//! The construction module contains logic to build a delivery route from a request.

mod builder;
pub use self::builder::RouteBuilder;

mod penalties;
pub use self::penalties::PenaltyModel;

mod risk;
pub use self::risk::RiskScorer;
