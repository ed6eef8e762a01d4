//! Injectable time source.
//!
//! Streak and rollover logic depend on "now" and "today"; hiding the wall
//! clock behind a trait keeps those paths deterministic in tests without
//! patching the system clock.

use std::cell::Cell;
use std::rc::Rc;

use chrono::{DateTime, Local, Utc};

use crate::day::DayId;

/// Source of the current instant and the current local calendar day.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;

    /// The current calendar day as seen on the user's wall clock.
    fn today(&self) -> DayId;
}

/// The real wall clock. `today` goes through [`Local`] so the day bucket
/// matches the user's timezone, not UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> DayId {
        DayId::from_date(Local::now().date_naive())
    }
}

/// A settable clock for tests. Cloning shares the underlying state, so a
/// test can keep a handle after handing the clock to a store.
#[derive(Debug, Clone)]
pub struct FixedClock {
    state: Rc<Cell<(DateTime<Utc>, DayId)>>,
}

impl FixedClock {
    /// Create a clock frozen at the given instant and day.
    pub fn new(now: DateTime<Utc>, today: DayId) -> Self {
        FixedClock {
            state: Rc::new(Cell::new((now, today))),
        }
    }

    /// Jump to a new instant and day.
    pub fn set(&self, now: DateTime<Utc>, today: DayId) {
        self.state.set((now, today));
    }

    /// Move both the instant and the day forward by whole days.
    pub fn advance_days(&self, days: i64) {
        let (now, today) = self.state.get();
        self.state
            .set((now + chrono::Duration::days(days), today.offset_days(days)));
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.state.get().0
    }

    fn today(&self) -> DayId {
        self.state.get().1
    }
}
