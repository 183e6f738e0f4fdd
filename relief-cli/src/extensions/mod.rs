//! Module provides various helper functionality.

pub mod config;
pub mod logging;
pub mod optimize;
pub mod predict;
