//! Collapses a workday's raw event log into display intervals.
//!
//! The raw log stores one event per transition; the status view wants one
//! row per interval: the workday opening, each completed break with its
//! duration, an ongoing break measured up to now, and the workday closing
//! carrying the gross span of the day.

use crate::libs::event::{EventType, WorkdayEvent};
use crate::libs::formatter::TimeWorked;
use chrono::NaiveDateTime;
use std::fmt;

/// Kind of grouped interval shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    StartWorkday,
    Break,
    BreakOngoing,
    EndWorkday,
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            GroupKind::StartWorkday => "workday started",
            GroupKind::Break => "break",
            GroupKind::BreakOngoing => "break (ongoing)",
            GroupKind::EndWorkday => "workday ended",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupedEvent {
    pub kind: GroupKind,
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
    /// `None` for the workday opening, which marks an instant rather than
    /// an interval. The closing row carries the gross workday span.
    pub duration: Option<TimeWorked>,
}

pub fn group_workday_events(events: &[WorkdayEvent], now: NaiveDateTime) -> Vec<GroupedEvent> {
    let mut grouped = Vec::new();
    let last = events.len().saturating_sub(1);

    for (index, event) in events.iter().enumerate() {
        match event.kind {
            EventType::StartWorkday => grouped.push(GroupedEvent {
                kind: GroupKind::StartWorkday,
                start: event.time,
                end: None,
                duration: None,
            }),
            EventType::StartBreak if index == last => grouped.push(GroupedEvent {
                kind: GroupKind::BreakOngoing,
                start: event.time,
                end: Some(now),
                duration: Some(TimeWorked::from_seconds((now - event.time).num_seconds())),
            }),
            // A matched start-break is folded into its end-break row.
            EventType::StartBreak => {}
            EventType::EndBreak => {
                let start = events[index - 1].time;
                grouped.push(GroupedEvent {
                    kind: GroupKind::Break,
                    start,
                    end: Some(event.time),
                    duration: Some(TimeWorked::from_seconds((event.time - start).num_seconds())),
                });
            }
            EventType::EndWorkday => {
                let opened = events[0].time;
                grouped.push(GroupedEvent {
                    kind: GroupKind::EndWorkday,
                    start: event.time,
                    end: None,
                    duration: Some(TimeWorked::from_seconds((event.time - opened).num_seconds())),
                });
            }
        }
    }

    grouped
}
