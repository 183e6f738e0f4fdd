//! This module contains generic algorithms used by the engine.

pub mod math;
