//! Time source for ticket timestamps

use jiff::{SignedDuration, Timestamp};
use parking_lot::Mutex;

/// Source of "now" for creation and update timestamps
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Manually driven clock for tests and replays
///
/// Each call to `now` returns the current instant and then moves it forward
/// by `step`, so consecutive reads are strictly increasing when `step > 0`.
#[derive(Debug)]
pub struct ManualClock {
    current: Mutex<Timestamp>,
    step: SignedDuration,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        Self::with_step(start, SignedDuration::ZERO)
    }

    pub fn with_step(start: Timestamp, step: SignedDuration) -> Self {
        Self {
            current: Mutex::new(start),
            step,
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        let mut current = self.current.lock();
        let now = *current;
        *current = now.checked_add(self.step).unwrap_or(Timestamp::MAX);
        now
    }
}
