//! Cancellable timers driven by host-supplied monotonic time.
//!
//! Timers never read a clock themselves. The owner passes `now` (time since an
//! arbitrary origin) into every call, so tests can step time explicitly.

use std::time::Duration;

use super::errors::TimerError;

/// Timer that fires once per `period` until cancelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatingTimer {
    period: Duration,
    next_due: Option<Duration>,
}

impl RepeatingTimer {
    /// Starts a timer whose first tick is due at `now + period`.
    ///
    /// # Errors
    /// Returns [`TimerError::ZeroPeriod`] if `period` is zero.
    pub fn start(now: Duration, period: Duration) -> Result<Self, TimerError> {
        if period.is_zero() {
            return Err(TimerError::ZeroPeriod { period });
        }
        Ok(Self {
            period,
            next_due: Some(now.saturating_add(period)),
        })
    }

    /// Tick period.
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Returns whether the timer will still fire.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    /// Returns the number of ticks that elapsed up to `now`.
    pub fn poll(&mut self, now: Duration) -> u32 {
        let Some(mut due) = self.next_due else {
            return 0;
        };
        let mut fired = 0;
        while due <= now {
            fired += 1;
            due = due.saturating_add(self.period);
        }
        self.next_due = Some(due);
        fired
    }

    /// Stops the timer. Later polls report nothing.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }
}

/// Timer that fires at most once per arming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OneShotTimer {
    deadline: Option<Duration>,
}

impl OneShotTimer {
    /// Creates a disarmed timer.
    #[must_use]
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Arms the timer to fire at `now + delay`, replacing any pending deadline.
    pub fn arm(&mut self, now: Duration, delay: Duration) {
        self.deadline = Some(now.saturating_add(delay));
    }

    /// Returns whether a deadline is pending.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Pending deadline, if armed.
    #[must_use]
    pub const fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Disarms the timer. Returns whether a deadline was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Fires if the deadline has passed. Disarms on firing.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
