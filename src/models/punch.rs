use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// A single clock-in / clock-out entry read from a punch log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PunchEvent {
    pub identifier: String,     // ⇔ device / person id column
    pub timestamp: NaiveDateTime, // ⇔ "Log Date" column
}

impl PunchEvent {
    pub fn new(identifier: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Self {
            identifier: identifier.into(),
            timestamp,
        }
    }

    /// Calendar day the punch belongs to.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

/// Punch events in source-file order.
#[derive(Debug, Clone, Default)]
pub struct PunchTable {
    pub events: Vec<PunchEvent>,
}

impl PunchTable {
    pub fn new(events: Vec<PunchEvent>) -> Self {
        Self { events }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
