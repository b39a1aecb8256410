//! Semaphore-coordinated bounded buffer for producer/consumer threads.
//!
//! This crate implements the classic producer-consumer pattern over a
//! fixed-capacity buffer: two counting semaphores coordinate the two
//! sides while a mutex guards the occupancy counter during mutation.
//!
//! # Components
//!
//! - [`Semaphore`]: thread-blocking counting semaphore with a `close`
//!   escape hatch for cancellation
//! - [`BoundedBuffer`]: the shared buffer, exposing blocking
//!   [`produce`] and [`consume`] operations
//! - [`AuditSink`] / [`FileAuditLog`] / [`MemoryAuditLog`]: the
//!   line-oriented audit log each operation writes to
//! - [`run_producer`] / [`run_consumer`]: loop drivers for the two
//!   worker threads
//!
//! # Coordination
//!
//! A buffer of capacity `n` starts with `n` empty-slot permits and no
//! full-slot permits. A produce takes an empty-slot permit (blocking
//! while the buffer is full), bumps the occupancy counter under the
//! guard, writes its audit record, and only then hands a full-slot
//! permit to the consumer side. Consume is symmetric. Occupancy is
//! mutated exclusively under the guard, and permits are released only
//! after the mutation is committed and the guard dropped, so the
//! occupancy counter and the two permit counts never diverge.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//! use std::time::Duration;
//! use prodcons_buffer::{BoundedBuffer, MemoryAuditLog, run_consumer, run_producer};
//!
//! let buffer = Arc::new(BoundedBuffer::new(7, Arc::new(MemoryAuditLog::new())));
//!
//! let producer = {
//!     let buffer = Arc::clone(&buffer);
//!     thread::spawn(move || run_producer(&buffer, 15, Duration::from_millis(1)))
//! };
//! let consumer = {
//!     let buffer = Arc::clone(&buffer);
//!     thread::spawn(move || run_consumer(&buffer, 12, Duration::from_millis(1)))
//! };
//!
//! producer.join().unwrap();
//! consumer.join().unwrap();
//! assert_eq!(buffer.occupancy(), 3);
//! ```
//!
//! # Cancellation
//!
//! [`BoundedBuffer::cancel`] closes both semaphores: blocked and
//! future operations fail with [`Cancelled`] without mutating
//! occupancy, while an operation already past its acquire completes
//! its mutate-and-signal sequence normally. The semaphore acquires are
//! the only points at which cancellation is observable.
//!
//! # Thread Safety
//!
//! [`BoundedBuffer`] is `Send + Sync`; share it between the two worker
//! threads with `Arc`. Audit sinks serialize their own writes, so log
//! lines are never interleaved.
//!
//! [`produce`]: BoundedBuffer::produce
//! [`consume`]: BoundedBuffer::consume

mod audit;
mod bounded;
mod error;
mod semaphore;
mod worker;

pub use audit::{AuditSink, FileAuditLog, MemoryAuditLog};
pub use bounded::{BoundedBuffer, Role};
pub use error::Cancelled;
pub use semaphore::Semaphore;
pub use worker::{run_consumer, run_producer};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Semaphore>();
        assert_send_sync::<BoundedBuffer>();
        assert_send_sync::<FileAuditLog>();
        assert_send_sync::<MemoryAuditLog>();
    }
}
