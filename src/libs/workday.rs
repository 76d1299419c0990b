//! Event log model: workdays and the tracking history they form.
//!
//! A `Workday` is an append-only sequence of timestamped transition events,
//! always opened by a single `start-workday` event. A user's `TrackingData`
//! is the ordered collection of workdays; only the last one may be open.

use crate::libs::event::{EventType, WorkdayEvent};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One open/close cycle of work, containing zero or more breaks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workday {
    /// Paid break allowance in minutes, a snapshot of the user's setting
    /// at the moment the workday started.
    pub paid_break_duration: i64,
    /// Events appended in non-decreasing time order. Ties are possible.
    pub events: Vec<WorkdayEvent>,
}

impl Workday {
    /// Opens a new workday with its single `start-workday` event.
    pub fn start(paid_break_duration: i64, time: NaiveDateTime) -> Self {
        Self {
            paid_break_duration,
            events: vec![WorkdayEvent::new(EventType::StartWorkday, time)],
        }
    }

    pub fn last_event(&self) -> Option<&WorkdayEvent> {
        self.events.last()
    }

    /// A workday is open while its last event is not `end-workday`.
    pub fn is_open(&self) -> bool {
        self.last_event().map_or(false, |event| event.kind != EventType::EndWorkday)
    }

    /// Calendar day of the opening event.
    pub fn started_on(&self) -> Option<NaiveDate> {
        self.events.first().map(|event| event.time.date())
    }
}

/// The ordered, append-only collection of a user's workdays.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrackingData {
    pub workdays: Vec<Workday>,
}

impl TrackingData {
    pub fn last_workday(&self) -> Option<&Workday> {
        self.workdays.last()
    }

    pub fn last_workday_mut(&mut self) -> Option<&mut Workday> {
        self.workdays.last_mut()
    }

    /// True iff a workday exists and its last event is not `end-workday`.
    /// Earlier workdays are always closed, so only the last one is checked.
    pub fn has_open_workday(&self) -> bool {
        self.last_workday().map_or(false, Workday::is_open)
    }
}
