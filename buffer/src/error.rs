//! Error types for buffer operations.

/// Blocking operation interrupted by cancellation.
///
/// Returned by [`Semaphore::acquire`] (and therefore by
/// [`BoundedBuffer::produce`] and [`BoundedBuffer::consume`]) when the
/// semaphore a caller is blocked on — or about to block on — has been
/// closed. The buffer state is untouched: a cancelled operation never
/// got past its acquire, so occupancy was not mutated.
///
/// Audit log I/O failures are deliberately *not* part of this type:
/// they are non-fatal, reported through `tracing`, and never abort an
/// operation (see [`BoundedBuffer`]).
///
/// [`Semaphore::acquire`]: crate::Semaphore::acquire
/// [`BoundedBuffer::produce`]: crate::BoundedBuffer::produce
/// [`BoundedBuffer::consume`]: crate::BoundedBuffer::consume
/// [`BoundedBuffer`]: crate::BoundedBuffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("buffer: operation cancelled")]
pub struct Cancelled;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_display() {
        assert_eq!(format!("{}", Cancelled), "buffer: operation cancelled");
    }

    #[test]
    fn test_cancelled_equality() {
        assert_eq!(Cancelled, Cancelled);
    }
}
