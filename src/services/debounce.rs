//! Quiet-period debouncing for search input.
//!
//! The caller owns the clock: every method takes the current [`Instant`], so
//! the debouncer can be driven by an event loop, a timer, or a test.

use std::time::{Duration, Instant};

/// Holds the latest input until it has been stable for `delay`.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
    last_emitted: Option<T>,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    /// Creates a debouncer with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            last_emitted: None,
        }
    }

    /// Seeds the last applied value so an unchanged input is not re-emitted.
    pub fn with_current(mut self, current: T) -> Self {
        self.last_emitted = Some(current);
        self
    }

    /// Records a new input, restarting the quiet period.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Returns the pending value once the quiet period has elapsed.
    ///
    /// A value equal to the last emitted one is dropped.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let ready = matches!(&self.pending, Some((_, at)) if now.saturating_duration_since(*at) >= self.delay);
        if !ready {
            return None;
        }

        let (value, _) = self.pending.take()?;
        if self.last_emitted.as_ref() == Some(&value) {
            return None;
        }
        self.last_emitted = Some(value.clone());
        Some(value)
    }

    /// Time left before the pending value is due, if any.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|(_, at)| self.delay.saturating_sub(now.saturating_duration_since(*at)))
    }

    /// Drops any pending value without emitting it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
