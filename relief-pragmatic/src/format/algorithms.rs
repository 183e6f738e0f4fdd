//! Describes available route construction algorithms.

#[cfg(test)]
#[path = "../../tests/unit/format/algorithms_test.rs"]
mod algorithms_test;

use serde::{Deserialize, Serialize};
use std::io::{BufWriter, Error, Write};

/// An algorithm availability status.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmStatus {
    /// An algorithm can be used.
    Available,
    /// An algorithm is planned, but cannot be used yet.
    PendingImplementation,
}

/// Describes a route construction algorithm.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmInfo {
    /// An algorithm name.
    pub name: String,
    /// A human readable description.
    pub description: String,
    /// A time complexity.
    pub complexity: String,
    /// Problems the algorithm suits best.
    pub best_for: String,
    /// An availability status.
    pub status: AlgorithmStatus,
    /// Whether it is used when no algorithm is requested explicitly.
    pub default: bool,
}

/// Returns the algorithm catalog.
pub fn list_algorithms() -> Vec<AlgorithmInfo> {
    vec![
        AlgorithmInfo {
            name: "greedy_nearest_neighbor".to_string(),
            description: "nearest neighbor with weather and closure penalties".to_string(),
            complexity: "O(n^2)".to_string(),
            best_for: "small to medium amount of destinations".to_string(),
            status: AlgorithmStatus::Available,
            default: true,
        },
        AlgorithmInfo {
            name: "or_tools_vrp".to_string(),
            description: "vehicle routing with capacity and time window constraints".to_string(),
            complexity: "NP-hard".to_string(),
            best_for: "multiple vehicles with constraints".to_string(),
            status: AlgorithmStatus::PendingImplementation,
            default: false,
        },
    ]
}

/// Serializes algorithm catalog into json format.
pub fn serialize_algorithms<W: Write>(writer: BufWriter<W>, algorithms: &[AlgorithmInfo]) -> Result<(), Error> {
    serde_json::to_writer_pretty(writer, algorithms).map_err(Error::from)
}
