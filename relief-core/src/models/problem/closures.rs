#[cfg(test)]
#[path = "../../../tests/unit/models/problem/closures_test.rs"]
mod closures_test;

use crate::models::common::{GeoPoint, Timestamp};

/// Specifies when a closure is active: from `start` to optional `end`, both inclusive.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveWindow {
    /// A start time.
    pub start: Timestamp,
    /// An estimated end time, `None` means the closure has no known end.
    pub end: Option<Timestamp>,
}

impl ActiveWindow {
    /// Creates a new instance of `ActiveWindow`.
    pub fn new(start: Timestamp, end: Option<Timestamp>) -> Self {
        Self { start, end }
    }

    /// Checks whether the window covers given time.
    pub fn contains(&self, time: Timestamp) -> bool {
        self.start <= time && self.end.is_none_or(|end| end >= time)
    }
}

/// A road closure: a set of affected coordinates, rendered impassable or risky for a time window.
#[derive(Clone, Debug)]
pub struct ClosureRecord {
    /// A closure id.
    pub id: i64,
    /// A severity level in range 1..5, 5 is the most severe.
    pub severity: u8,
    /// Affected coordinates.
    pub coordinates: Vec<GeoPoint>,
    /// An active window.
    pub active: ActiveWindow,
}

impl ClosureRecord {
    /// Checks whether the closure is active at given time.
    pub fn is_active_at(&self, time: Timestamp) -> bool {
        self.active.contains(time)
    }
}

/// Supplies closures which are active at the given time.
pub trait ClosureProvider {
    /// Returns closures satisfying `start <= time AND (end IS NULL OR end >= time)`.
    fn get_active(&self, time: Timestamp) -> Vec<ClosureRecord>;
}

/// A closure provider backed by a list of records known upfront.
#[derive(Clone, Debug, Default)]
pub struct StaticClosures {
    records: Vec<ClosureRecord>,
}

impl StaticClosures {
    /// Creates a new instance of `StaticClosures`.
    pub fn new(records: Vec<ClosureRecord>) -> Self {
        Self { records }
    }

    /// Adds more records.
    pub fn extend(&mut self, records: impl IntoIterator<Item = ClosureRecord>) {
        self.records.extend(records);
    }

    /// Returns all known records regardless of their active window.
    pub fn records(&self) -> &[ClosureRecord] {
        self.records.as_slice()
    }
}

impl ClosureProvider for StaticClosures {
    fn get_active(&self, time: Timestamp) -> Vec<ClosureRecord> {
        self.records.iter().filter(|record| record.is_active_at(time)).cloned().collect()
    }
}
