use chrono::prelude::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Transition types recorded in a workday's event log.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    StartWorkday,
    StartBreak,
    EndBreak,
    EndWorkday,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            EventType::StartWorkday => "start-workday",
            EventType::StartBreak => "start-break",
            EventType::EndBreak => "end-break",
            EventType::EndWorkday => "end-workday",
        };
        write!(f, "{}", name)
    }
}

/// A single timestamped transition. Immutable once appended to a workday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkdayEvent {
    pub time: NaiveDateTime,
    #[serde(rename = "type")]
    pub kind: EventType,
}

impl WorkdayEvent {
    pub fn new(kind: EventType, time: NaiveDateTime) -> Self {
        Self { time, kind }
    }
}
