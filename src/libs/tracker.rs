//! Workday/break state machine.
//!
//! The tracker enforces legal transitions between work and break states,
//! appends to the current workday's event log and notifies the active
//! subscriber after every successful mutation. It holds an exclusive borrow
//! of the user for its lifetime and is a stateless wrapper over the
//! tracking data: two trackers constructed over identical data reach
//! identical derived state.
//!
//! All mutating operations timestamp events with the injected clock's
//! "now" at call time. An operation either fully appends its event and
//! notifies, or fails before mutating anything.

use crate::libs::clock::{Clock, SystemClock};
use crate::libs::event::{EventType, WorkdayEvent};
use crate::libs::formatter::TimeWorked;
use crate::libs::time_worked;
use crate::libs::user::User;
use crate::libs::workday::{TrackingData, Workday};
use crate::msg_debug;
use std::sync::Arc;
use thiserror::Error;

const CANNOT_START_WORKDAY: &str = "Cannot start workday if current workday has not ended.";
const WORKDAY_NOT_STARTED: &str = "Workday has not started.";
const CANNOT_END_BREAK: &str = "Cannot end the break if a break has not started.";
const CANNOT_END_WORKDAY: &str = "Cannot end the workday because it has not started.";

/// Errors raised by tracker operations.
///
/// There is a single kind: the requested transition is illegal in the
/// current state. The tracker never recovers internally; callers are
/// expected to prevent the condition (e.g. by disabling UI affordances)
/// rather than catch it routinely.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrackerError {
    #[error("{0}")]
    InvalidTransition(&'static str),
}

/// Handle returned by [`Tracker::subscribe`]. Passing it back to
/// [`Tracker::unsubscribe`] removes the handler it was issued for.
#[derive(Debug, PartialEq, Eq)]
pub struct Subscription(u64);

type ChangeHandler<'a> = Box<dyn FnMut(&User, EventType) + 'a>;

/// The stateful tracking component driving a user's workday history.
pub struct Tracker<'a> {
    user: &'a mut User,
    clock: Arc<dyn Clock>,
    observer: Option<(u64, ChangeHandler<'a>)>,
    next_subscription: u64,
}

impl<'a> Tracker<'a> {
    /// Wraps the user with the production wall clock.
    pub fn new(user: &'a mut User) -> Self {
        Self::with_clock(user, Arc::new(SystemClock))
    }

    /// Wraps the user with an injected clock, letting tests fix and
    /// advance virtual time.
    pub fn with_clock(user: &'a mut User, clock: Arc<dyn Clock>) -> Self {
        Self {
            user,
            clock,
            observer: None,
            next_subscription: 0,
        }
    }

    /// Opens a new workday with a single `start-workday` event at the
    /// current time. The paid break allowance is read from the user's
    /// settings at call time, so settings changes affect only future
    /// workdays.
    pub fn start_workday(&mut self) -> Result<(), TrackerError> {
        if self.user.tracking_data.has_open_workday() {
            return Err(TrackerError::InvalidTransition(CANNOT_START_WORKDAY));
        }

        let workday = Workday::start(self.user.settings.paid_break_duration, self.clock.now());
        self.user.tracking_data.workdays.push(workday);
        self.notify(EventType::StartWorkday);
        Ok(())
    }

    /// Appends a `start-break` event to the open workday.
    pub fn start_break(&mut self) -> Result<(), TrackerError> {
        if !self.user.tracking_data.has_open_workday() {
            return Err(TrackerError::InvalidTransition(WORKDAY_NOT_STARTED));
        }

        self.append(EventType::StartBreak);
        self.notify(EventType::StartBreak);
        Ok(())
    }

    /// Appends an `end-break` event. Legal only while a break is open.
    pub fn end_break(&mut self) -> Result<(), TrackerError> {
        if !self.has_break_started() {
            return Err(TrackerError::InvalidTransition(CANNOT_END_BREAK));
        }

        self.append(EventType::EndBreak);
        self.notify(EventType::EndBreak);
        Ok(())
    }

    /// Appends an `end-workday` event, closing the current workday.
    ///
    /// Ending mid-break implicitly closes the break: an `end-break` event
    /// is appended with the same timestamp immediately before
    /// `end-workday`, so the tail of the log is accounted as break time
    /// rather than work. A single change notification is emitted for the
    /// whole operation.
    pub fn end_workday(&mut self) -> Result<(), TrackerError> {
        let closable = self
            .user
            .tracking_data
            .last_workday()
            .map_or(false, Workday::is_open);
        if !closable {
            return Err(TrackerError::InvalidTransition(CANNOT_END_WORKDAY));
        }

        if self.has_break_started() {
            self.append(EventType::EndBreak);
        }
        self.append(EventType::EndWorkday);
        self.notify(EventType::EndWorkday);
        Ok(())
    }

    /// True iff a workday exists and its last event is not `end-workday`.
    pub fn has_workday_started(&self) -> bool {
        self.user.tracking_data.has_open_workday()
    }

    /// True iff a workday exists and its last event is `start-break`.
    pub fn has_break_started(&self) -> bool {
        self.user
            .tracking_data
            .last_workday()
            .and_then(Workday::last_event)
            .map_or(false, |event| event.kind == EventType::StartBreak)
    }

    /// True if no workday exists yet, or the last workday is closed and
    /// started on a different calendar day than now. A closed workday
    /// started today still blocks a restart.
    pub fn can_start_workday(&self) -> bool {
        match self.user.tracking_data.last_workday() {
            None => true,
            Some(workday) => {
                !workday.is_open()
                    && workday
                        .started_on()
                        .map_or(true, |date| date != self.clock.now().date())
            }
        }
    }

    /// Returns an owned snapshot of the tracking data. The live log can
    /// only be mutated through tracker operations.
    pub fn tracking_data(&self) -> TrackingData {
        self.user.tracking_data.clone()
    }

    /// Events of the last workday, or an empty list if none exists.
    pub fn current_workday_events(&self) -> Vec<WorkdayEvent> {
        self.user
            .tracking_data
            .last_workday()
            .map(|workday| workday.events.clone())
            .unwrap_or_default()
    }

    /// Time worked for the workday in progress or the last full workday.
    pub fn time_worked(&self) -> TimeWorked {
        time_worked::time_worked(self.user.tracking_data.last_workday(), self.clock.now())
    }

    pub fn user(&self) -> &User {
        self.user
    }

    /// Registers the change handler, called synchronously with the updated
    /// user and the event type after each successful mutating operation.
    ///
    /// At most one subscriber is active at a time: subscribing again
    /// replaces the previous handler and invalidates its handle.
    pub fn subscribe(&mut self, handler: impl FnMut(&User, EventType) + 'a) -> Subscription {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.observer = Some((id, Box::new(handler)));
        Subscription(id)
    }

    /// Removes the handler if `subscription` is the active one. Handles
    /// invalidated by a later `subscribe` are ignored.
    pub fn unsubscribe(&mut self, subscription: Subscription) {
        if matches!(&self.observer, Some((id, _)) if *id == subscription.0) {
            self.observer = None;
        }
    }

    fn append(&mut self, kind: EventType) {
        let now = self.clock.now();
        if let Some(workday) = self.user.tracking_data.last_workday_mut() {
            workday.events.push(WorkdayEvent::new(kind, now));
        }
    }

    fn notify(&mut self, kind: EventType) {
        msg_debug!(format!("tracker recorded event: {}", kind));
        if let Some((_, handler)) = self.observer.as_mut() {
            handler(&*self.user, kind);
        }
    }
}
