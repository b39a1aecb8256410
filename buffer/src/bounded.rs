//! Semaphore-coordinated bounded buffer.

use std::sync::{Arc, Mutex};

use tracing::warn;

use crate::audit::AuditSink;
use crate::error::Cancelled;
use crate::semaphore::Semaphore;

/// Identity of a task driving the buffer, as it appears in audit
/// records. The labels are the exact strings the audit log format
/// requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Producer,
    Consumer,
}

impl Role {
    /// The audit-record label for this role.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Producer => "Produtor",
            Role::Consumer => "Consumidor",
        }
    }
}

/// A fixed-capacity slot buffer shared by one producer and one
/// consumer thread.
///
/// Items carry no payload; the buffer tracks occupancy only. Two
/// counting semaphores coordinate the threads — `empty_slots`
/// (initially `capacity`) gates producers, `full_slots` (initially 0)
/// gates consumers — while a mutex guards the occupancy counter during
/// mutation.
///
/// # Semantics
///
/// - **Produce**: blocks while the buffer is full, then records one
///   inserted item and signals the consumer side.
/// - **Consume**: blocks while the buffer is empty, then records one
///   removed item and signals the producer side.
/// - **Cancel**: [`cancel`] unblocks both sides; blocked and future
///   operations return [`Cancelled`] without touching occupancy.
///
/// Each completed operation appends one line to the audit sink with
/// the remaining free slot count, computed while the occupancy guard
/// is held. A sink write failure is reported through `tracing` and
/// does not abort the operation or skip its signaling.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use prodcons_buffer::{BoundedBuffer, MemoryAuditLog};
///
/// let buffer = BoundedBuffer::new(2, Arc::new(MemoryAuditLog::new()));
/// buffer.produce().unwrap();
/// buffer.produce().unwrap(); // buffer is now full
/// buffer.consume().unwrap();
/// assert_eq!(buffer.occupancy(), 1);
/// ```
///
/// [`cancel`]: BoundedBuffer::cancel
pub struct BoundedBuffer {
    capacity: usize,
    occupancy: Mutex<usize>,
    empty_slots: Semaphore,
    full_slots: Semaphore,
    audit: Arc<dyn AuditSink>,
}

impl BoundedBuffer {
    /// Creates a buffer with the given capacity and audit sink.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize, audit: Arc<dyn AuditSink>) -> Self {
        assert!(capacity > 0, "capacity must be greater than 0");
        BoundedBuffer {
            capacity,
            occupancy: Mutex::new(0),
            empty_slots: Semaphore::new(capacity),
            full_slots: Semaphore::new(0),
            audit,
        }
    }

    /// Inserts one item, blocking while the buffer is full.
    ///
    /// Returns `Err(Cancelled)` if [`cancel`] interrupts the wait for
    /// a free slot; occupancy is untouched in that case. Once the slot
    /// is acquired the operation runs to completion, including the
    /// consumer-side signal.
    ///
    /// [`cancel`]: BoundedBuffer::cancel
    pub fn produce(&self) -> Result<(), Cancelled> {
        self.empty_slots.acquire()?;
        {
            let mut occupancy = self.occupancy.lock().unwrap();
            *occupancy += 1;
            let slots_left = self.capacity - *occupancy;
            self.record(Role::Producer, "Inserido", slots_left);
        }
        // Guard is dropped before the consumer side is signaled
        self.full_slots.release();
        Ok(())
    }

    /// Removes one item, blocking while the buffer is empty.
    ///
    /// Symmetric to [`produce`]: cancellation is only observable while
    /// waiting for an item, and the producer-side signal always
    /// follows a committed removal.
    ///
    /// [`produce`]: BoundedBuffer::produce
    pub fn consume(&self) -> Result<(), Cancelled> {
        self.full_slots.acquire()?;
        {
            let mut occupancy = self.occupancy.lock().unwrap();
            *occupancy -= 1;
            let slots_left = self.capacity - *occupancy;
            self.record(Role::Consumer, "Consumido", slots_left);
        }
        self.empty_slots.release();
        Ok(())
    }

    /// Cancels the buffer: wakes both blocked sides and fails all
    /// future operations with [`Cancelled`]. Idempotent.
    pub fn cancel(&self) {
        self.empty_slots.close();
        self.full_slots.close();
    }

    /// Returns the buffer capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of items currently in the buffer.
    pub fn occupancy(&self) -> usize {
        *self.occupancy.lock().unwrap()
    }

    /// Returns true if the buffer holds no items.
    pub fn is_empty(&self) -> bool {
        self.occupancy() == 0
    }

    /// Returns true if every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.occupancy() == self.capacity
    }

    // Called with the occupancy guard held; the slot count in the
    // record must match the occupancy the operation committed.
    fn record(&self, role: Role, action: &str, slots_left: usize) {
        let line = format!(
            "{} - {} um item no buffer – espaços disponíveis: {}",
            role.label(),
            action,
            slots_left
        );
        if let Err(err) = self.audit.append(&line) {
            warn!("failed to write audit record: {}", err);
        }
    }
}
