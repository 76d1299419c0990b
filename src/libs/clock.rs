use chrono::{Duration, Local, NaiveDateTime};
use std::sync::Mutex;

/// Represents an entity responsible for providing the current time across
/// the application. Tracker operations timestamp events with `now()` at
/// call time, so injecting a clock is the only way to make them
/// deterministic under test.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Production clock: local wall-clock time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that only moves when told to. Used by tests to fix and advance
/// virtual time.
pub struct MockClock {
    now: Mutex<NaiveDateTime>,
}

impl MockClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now: Mutex::new(now) }
    }

    pub fn set(&self, now: NaiveDateTime) {
        *self.now.lock().unwrap() = now;
    }

    pub fn advance(&self, delta: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += delta;
    }
}

impl Clock for MockClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock().unwrap()
    }
}
