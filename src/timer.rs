//! Cancellable one-shot timer slots.
//!
//! The frame loop is single-threaded, so a "timer" is just a deadline plus the
//! action to perform once the deadline has passed. A slot holds at most one
//! scheduled action: scheduling again replaces (and thereby cancels) the
//! previous one, so two activations for the same purpose can never race.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Scheduled<A> {
    due: Instant,
    action: A,
}

/// A single cancellable timer slot.
#[derive(Debug, Clone)]
pub struct TimerSlot<A> {
    scheduled: Option<Scheduled<A>>,
}

impl<A> Default for TimerSlot<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> TimerSlot<A> {
    pub fn new() -> Self {
        Self { scheduled: None }
    }

    /// Schedules `action` to fire `delay` after `now`, cancelling whatever was pending.
    pub fn schedule(&mut self, now: Instant, delay: Duration, action: A) {
        self.scheduled = Some(Scheduled {
            due: now + delay,
            action,
        });
    }

    /// Drops the pending action, if any. Returns true if something was cancelled.
    pub fn cancel(&mut self) -> bool {
        self.scheduled.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.scheduled.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.scheduled.as_ref().map(|s| s.due)
    }

    /// Takes the action out of the slot once its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<A> {
        match &self.scheduled {
            Some(s) if s.due <= now => self.scheduled.take().map(|s| s.action),
            _ => None,
        }
    }
}
