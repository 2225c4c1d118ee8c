//! Keystroke debouncer
//!
//! Holds the most recent term until the input has been idle for the
//! configured interval. Scheduling replaces any pending term, so at most one
//! fire is ever outstanding; dropping the owner drops the pending fire with
//! it.

use std::time::{Duration, Instant};

struct Pending {
    term: String,
    deadline: Instant,
}

/// Deadline-based debouncer polled from the event loop
pub struct Debouncer {
    delay: Duration,
    pending: Option<Pending>,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            pending: None,
        }
    }

    /// Schedule `term` to fire after the idle interval, replacing any
    /// previously pending term
    pub fn schedule(&mut self, term: String) {
        self.pending = Some(Pending {
            term,
            deadline: Instant::now() + self.delay,
        });
    }

    /// Drop the pending term without firing
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending term if its deadline has passed
    ///
    /// Returns the term at most once per schedule.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => {
                self.pending.take().map(|pending| pending.term)
            }
            _ => None,
        }
    }

    /// Fire the pending term immediately, ignoring the deadline
    ///
    /// Used by tests to step past the idle interval without sleeping.
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|pending| pending.term)
    }

    /// Time left until the pending deadline, `None` when nothing is pending
    ///
    /// The event loop uses this to bound its poll timeout so a fire is not
    /// delayed until the next input event.
    pub fn time_until_fire(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|pending| pending.deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
#[path = "debounce_tests.rs"]
mod debounce_tests;
