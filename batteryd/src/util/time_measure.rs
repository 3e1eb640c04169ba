//
// Copyright (c) batteryd contributors
// See License.txt for details
use std::time::{Duration, Instant};

/// Abstraction over `std::time::Instant` so time-driven code can run
/// against a virtual clock in tests.
pub trait TimeMeasure {
    fn now() -> Self;

    fn since(&self, other: &Self) -> Duration;

    fn elapsed(&self) -> Duration
    where
        Self: Sized,
    {
        Self::now().since(self)
    }
}

impl TimeMeasure for Instant {
    fn now() -> Self {
        Instant::now()
    }

    fn since(&self, other: &Self) -> Duration {
        Instant::duration_since(self, *other)
    }
}
