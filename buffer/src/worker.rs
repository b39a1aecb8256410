//! Producer and consumer loop drivers.
//!
//! Plain functions meant to run on dedicated threads: each takes a
//! shared [`BoundedBuffer`] reference, performs a fixed number of
//! operations with a pause between them, and stops early if the buffer
//! is cancelled. All synchronization lives in the buffer; the drivers
//! only sequence calls.

use std::thread;
use std::time::Duration;

use tracing::warn;

use crate::bounded::{BoundedBuffer, Role};

/// Runs up to `count` produce operations, sleeping `pause` after each.
///
/// Returns the number of completed operations; this is less than
/// `count` only if the buffer was cancelled mid-run.
pub fn run_producer(buffer: &BoundedBuffer, count: usize, pause: Duration) -> usize {
    run(buffer, Role::Producer, count, pause)
}

/// Runs up to `count` consume operations, sleeping `pause` after each.
///
/// Returns the number of completed operations, as [`run_producer`].
pub fn run_consumer(buffer: &BoundedBuffer, count: usize, pause: Duration) -> usize {
    run(buffer, Role::Consumer, count, pause)
}

fn run(buffer: &BoundedBuffer, role: Role, count: usize, pause: Duration) -> usize {
    for done in 0..count {
        let result = match role {
            Role::Producer => buffer.produce(),
            Role::Consumer => buffer.consume(),
        };
        if result.is_err() {
            warn!(
                "{} cancelled after {} of {} operations",
                role.label(),
                done,
                count
            );
            return done;
        }
        thread::sleep(pause);
    }
    count
}
