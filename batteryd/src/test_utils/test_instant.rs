//
// Copyright (c) batteryd contributors
// See License.txt for details
use std::{cell::RefCell, time::Duration};

use crate::util::time_measure::TimeMeasure;

/// A virtual clock for tests. Time only advances when `sleep` is called and
/// is private to the running thread.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant {
    t0: Duration,
}

thread_local! {
    static TIME: RefCell<Duration> = RefCell::new(Duration::from_secs(0));
}

impl TestInstant {
    pub fn now() -> Self {
        TIME.with(|t| TestInstant { t0: *t.borrow() })
    }

    pub fn from(d: Duration) -> Self {
        TestInstant { t0: d }
    }

    pub fn sleep(d: Duration) {
        TIME.with(|t| {
            let new_time = t.borrow().saturating_add(d);
            *t.borrow_mut() = new_time;
        })
    }
}

impl TimeMeasure for TestInstant {
    fn now() -> Self {
        Self::now()
    }

    fn since(&self, other: &Self) -> Duration {
        self.t0 - other.t0
    }
}
