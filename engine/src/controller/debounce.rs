//! Pending-run holder for debounced filtering.

use std::{future::Future, pin::Pin, time::Duration};

/// Holds at most one pending timer. Scheduling a new timer drops the old one,
/// which cancels the run it guarded.
pub struct Debounce<T> {
    delay: Duration,
    pending: Option<Pin<Box<T>>>,
    cancelled: u64,
}

impl<T: Future<Output = ()>> Debounce<T> {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None, cancelled: 0 }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn schedule(&mut self, timer: T) {
        if self.pending.replace(Box::pin(timer)).is_some() {
            self.cancelled += 1;
        }
    }

    /// Drops the pending timer, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        let was_pending = self.pending.take().is_some();
        if was_pending {
            self.cancelled += 1;
        }
        was_pending
    }

    /// Clears the pending timer after it has fired.
    pub fn fired(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn timer_mut(&mut self) -> Option<&mut Pin<Box<T>>> {
        self.pending.as_mut()
    }

    /// How many scheduled runs were superseded or cancelled.
    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }
}
