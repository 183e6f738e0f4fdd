//! This module contains some statistic and linear algebra related functionality.

mod linalg;
pub use self::linalg::*;
