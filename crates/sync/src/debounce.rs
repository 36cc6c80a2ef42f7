//! Single-slot debouncing against a caller-supplied clock.

use std::time::Duration;

/// One debounced channel.
///
/// At most one request is pending. Scheduling again replaces the payload and
/// restarts the delay. Time is whatever monotonic `Duration` the caller uses
/// (typically time since start); nothing here reads a clock.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(Duration, T)>,
}

impl<T> Debouncer<T> {
    /// Creates an idle channel with the given delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Returns the configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules `value` to fire at `now + delay`, dropping any pending one.
    pub fn schedule(&mut self, now: Duration, value: T) {
        self.pending = Some((now + self.delay, value));
    }

    /// Takes the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        if self.deadline().is_some_and(|deadline| deadline <= now) {
            self.pending.take().map(|(_, v)| v)
        } else {
            None
        }
    }

    /// Drops the pending value, if any.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, v)| v)
    }

    /// Whether a value is waiting.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline of the pending value.
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.as_ref().map(|(d, _)| *d)
    }
}
