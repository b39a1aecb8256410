//! Counting semaphore built on a mutex and a condition variable.

use std::sync::{Condvar, Mutex};

use crate::error::Cancelled;

/// A thread-blocking counting semaphore.
///
/// The semaphore holds a non-negative permit count. [`acquire`] blocks
/// the calling thread (without busy-waiting) until a permit is
/// available, then takes it; [`release`] returns a permit and wakes at
/// most one blocked acquirer. No wake-up fairness is promised.
///
/// [`close`] cancels the semaphore: every blocked acquirer is woken
/// with [`Cancelled`] and every later `acquire` fails immediately.
/// `release` remains a no-op-safe increment after close so that
/// in-flight operations can still run their signaling to completion.
///
/// [`acquire`]: Semaphore::acquire
/// [`release`]: Semaphore::release
/// [`close`]: Semaphore::close
pub struct Semaphore {
    state: Mutex<SemaphoreState>,
    available: Condvar,
}

struct SemaphoreState {
    permits: usize,
    closed: bool,
}

impl Semaphore {
    /// Creates a semaphore with the given initial permit count.
    pub fn new(permits: usize) -> Self {
        Semaphore {
            state: Mutex::new(SemaphoreState {
                permits,
                closed: false,
            }),
            available: Condvar::new(),
        }
    }

    /// Acquires one permit, blocking until one is available.
    ///
    /// Returns `Err(Cancelled)` if the semaphore is closed before or
    /// while waiting; no permit is consumed in that case. This is the
    /// only point at which the calling thread suspends.
    pub fn acquire(&self) -> Result<(), Cancelled> {
        let mut state = self.state.lock().unwrap();
        loop {
            if state.closed {
                return Err(Cancelled);
            }
            if state.permits > 0 {
                state.permits -= 1;
                return Ok(());
            }
            state = self.available.wait(state).unwrap();
        }
    }

    /// Releases one permit and wakes one blocked acquirer, if any.
    pub fn release(&self) {
        let mut state = self.state.lock().unwrap();
        state.permits += 1;
        self.available.notify_one();
    }

    /// Closes the semaphore, waking all blocked acquirers with
    /// [`Cancelled`]. Idempotent.
    pub fn close(&self) {
        let mut state = self.state.lock().unwrap();
        if state.closed {
            return;
        }
        state.closed = true;
        self.available.notify_all();
    }

    /// Returns the current permit count.
    pub fn permits(&self) -> usize {
        let state = self.state.lock().unwrap();
        state.permits
    }
}
