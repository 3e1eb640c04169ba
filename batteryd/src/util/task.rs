//
// Copyright (c) batteryd contributors
// See License.txt for details
use std::time::{Duration, Instant};

use eyre::Result;
use log::{trace, warn};

use super::time_measure::TimeMeasure;

/// Run `work` every `period` until `condition` says to stop.
///
/// Work errors are logged and do not change the cadence. If a run takes
/// longer than `period` the next one starts immediately.
///
/// A signal wakes the sleep early so the condition is re-checked right away.
/// (The signal still has to be caught somewhere or it terminates the process.)
pub fn loop_with_interval<W: FnMut() -> Result<()>, C: FnMut() -> LoopContinuation>(
    work: W,
    condition: C,
    period: Duration,
) {
    loop_with_interval_internal::<_, _, Instant>(work, condition, period, interruptible_sleep)
}

// std::thread::sleep resumes after a signal; shuteye::sleep returns early,
// which is what lets signals break the cadence.
fn interruptible_sleep(d: Duration) {
    shuteye::sleep(d);
}

/// Specify how to continue execution
#[derive(PartialEq, Eq)]
pub enum LoopContinuation {
    /// Continue running the loop normally
    KeepRunning,
    /// Stop running the loop
    Stop,
}

fn loop_with_interval_internal<
    W: FnMut() -> Result<()>,
    C: FnMut() -> LoopContinuation,
    Time: TimeMeasure,
>(
    mut work: W,
    mut condition: C,
    period: Duration,
    sleep: fn(Duration),
) {
    while condition() == LoopContinuation::KeepRunning {
        let start_work = Time::now();
        if let Err(e) = work() {
            warn!("{:#}", e);
        }

        if condition() == LoopContinuation::KeepRunning {
            if let Some(howlong) = period.checked_sub(start_work.elapsed()) {
                trace!("Sleep for {:?}", howlong);
                sleep(howlong);
            }
        }
    }
}
