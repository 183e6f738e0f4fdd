//! Specifies logic to write optimized routes in pragmatic format.

use super::Location;
use relief_core::models::solution::OptimizedRoute;
use std::io::{BufWriter, Write};

mod model;
pub use self::model::*;

mod writer;
pub use self::writer::*;
