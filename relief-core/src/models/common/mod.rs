//! Common models.

mod domain;
pub use self::domain::*;

mod distance;
pub use self::distance::*;
