//! Time-worked accounting for the current workday.
//!
//! Walks the last workday's event log against the current instant and
//! computes net seconds worked, crediting break time back into worked time
//! up to the workday's paid break allowance. Values computed while an event
//! is still in progress agree exactly with the values computed after the
//! event closes at the same instant.

use crate::libs::event::EventType;
use crate::libs::formatter::TimeWorked;
use crate::libs::workday::Workday;
use chrono::NaiveDateTime;

/// Time worked for the given workday as of `now`, or zero if there is no
/// workday. Prior, closed workdays are ignored by the caller; only the
/// current day's tally is user-facing.
pub fn time_worked(workday: Option<&Workday>, now: NaiveDateTime) -> TimeWorked {
    match workday {
        Some(workday) => TimeWorked::from_seconds(seconds_worked(workday, now)),
        None => TimeWorked::ZERO,
    }
}

/// Net seconds worked for a single workday as of `now`.
///
/// Each event is paired with its predecessor. `end-break` intervals count
/// as break time; `start-break` and `end-workday` intervals count as raw
/// work time. A trailing unmatched `start-break` accrues break time up to
/// `now`; a trailing `end-break` accrues work time up to `now`. Once
/// `end-workday` is recorded its own stored timestamp bounds the last
/// interval, so further wall-clock time does not change the result.
pub fn seconds_worked(workday: &Workday, now: NaiveDateTime) -> i64 {
    let events = &workday.events;
    match events.len() {
        0 => return 0,
        1 => return (now - events[0].time).num_seconds(),
        _ => {}
    }

    let last = events.len() - 1;
    let mut seconds_on_break = 0i64;
    let mut seconds_worked_raw = 0i64;

    for (index, event) in events.iter().enumerate() {
        match event.kind {
            EventType::StartBreak => {
                seconds_worked_raw += (event.time - events[index - 1].time).num_seconds();
                if index == last {
                    // Break is ongoing; it accrues up to the current instant.
                    seconds_on_break += (now - event.time).num_seconds();
                }
            }
            EventType::EndBreak => {
                seconds_on_break += (event.time - events[index - 1].time).num_seconds();
                if index == last {
                    // Workday still open after the break; work resumes.
                    seconds_worked_raw += (now - event.time).num_seconds();
                }
            }
            EventType::EndWorkday => {
                seconds_worked_raw += (event.time - events[index - 1].time).num_seconds();
            }
            EventType::StartWorkday => {}
        }
    }

    // The allowance is credited back into worked time, capped at the break
    // time actually taken.
    let paid_break_seconds = workday.paid_break_duration * 60;
    seconds_worked_raw + paid_break_seconds.min(seconds_on_break)
}
