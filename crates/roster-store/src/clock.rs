//! Time source for timestamps and "current month" calculations.

use std::cell::Cell;
use std::rc::Rc;

use chrono::{DateTime, Local, NaiveDate, Utc};

pub trait Clock {
    /// Current instant, used for `createdAt` / `updatedAt`.
    fn now(&self) -> DateTime<Utc>;

    /// Today's calendar date, used for tenure and new-hire calculations.
    fn today(&self) -> NaiveDate;
}

/// Wall clock. "Today" is the local calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Manually driven clock. Clones share the same instant.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Rc<Cell<DateTime<Utc>>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Rc::new(Cell::new(now)),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        self.now.set(now);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }

    fn today(&self) -> NaiveDate {
        self.now.get().date_naive()
    }
}
