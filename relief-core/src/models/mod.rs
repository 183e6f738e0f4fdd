//! A collection of models to represent route requests, constraints and optimized routes.

pub mod common;
pub mod problem;
pub mod solution;
