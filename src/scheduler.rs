use std::time::{Duration, Instant};

/// Recurring tick timer with a single slot.
///
/// Scheduling always replaces the armed timer, so at most one tick is ever
/// pending.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct TickScheduler {
    armed: Option<Armed>,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct Armed {
    interval: Duration,
    next_due: Instant,
}

impl TickScheduler {
    /// Arms a recurring tick every `interval`, first firing at `now + interval`.
    pub fn schedule(&mut self, interval: Duration, now: Instant) {
        self.armed = Some(Armed {
            interval,
            next_due: now + interval,
        });
    }

    pub fn cancel(&mut self) {
        self.armed = None;
    }

    /// Returns true when a tick is due at `now` and re-arms the next one.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        let Some(armed) = self.armed.as_mut() else {
            return false;
        };
        if now < armed.next_due {
            return false;
        }

        armed.next_due = now + armed.interval;
        true
    }

    /// Interval of the armed timer, if any.
    #[must_use]
    pub fn interval(&self) -> Option<Duration> {
        self.armed.map(|armed| armed.interval)
    }

    /// Instant of the next pending tick, if any.
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.armed.map(|armed| armed.next_due)
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }
}
