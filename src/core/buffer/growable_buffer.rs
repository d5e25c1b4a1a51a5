
use std::collections::VecDeque;

use super::{Pow2RingBuffer, FIXED_QUEUE_SIZE};

#[derive(Debug)]
enum Backing<T> {
  /// Compact ring used until its first saturation.
  Compact(Pow2RingBuffer<T>),
  /// Queue bounded logically by the requested capacity.
  Expanded(VecDeque<T>),
}

/// Bounded buffer that starts on a compact fixed ring and promotes
/// permanently to a queue once the ring saturates.
///
/// The compact ring holds `min(capacity, 128)` elements (rounded up to a
/// power of two), so the common short-lived case never allocates more than a
/// small fixed array even when the configured capacity is large. Promotion
/// drains all pending elements into the queue in FIFO order before the
/// triggering element is appended, and is never reverted.
#[derive(Debug)]
pub struct GrowableBuffer<T> {
  capacity: usize,
  backing:  Backing<T>,
}

impl<T> GrowableBuffer<T> {
  /// Creates a buffer bounded by `capacity`.
  ///
  /// # Panics
  ///
  /// Panics when `capacity` is zero.
  #[must_use]
  pub fn new(capacity: usize) -> Self {
    assert!(capacity > 0, "capacity must be positive");
    let compact = capacity.min(FIXED_QUEUE_SIZE).next_power_of_two();
    Self { capacity, backing: Backing::Compact(Pow2RingBuffer::new(compact)) }
  }

  /// Returns the number of buffered elements.
  #[must_use]
  pub fn used(&self) -> usize {
    match &self.backing {
      | Backing::Compact(ring) => ring.used(),
      | Backing::Expanded(queue) => queue.len(),
    }
  }

  /// Returns the capacity fixed at construction.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.capacity
  }

  /// Returns true when no element is buffered.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.used() == 0
  }

  /// Returns true when `used` has reached the capacity.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.used() == self.capacity
  }

  /// Returns true once the buffer has promoted to its expanded backing.
  #[must_use]
  pub const fn is_expanded(&self) -> bool {
    matches!(self.backing, Backing::Expanded(_))
  }

  /// Appends `elem` at the write cursor. Caller contract: `!self.is_full()`.
  ///
  /// The first enqueue into a saturated compact ring promotes the buffer,
  /// regardless of how much of the overall capacity is in use.
  pub fn enqueue(&mut self, elem: T) {
    debug_assert!(!self.is_full());
    match &mut self.backing {
      | Backing::Compact(ring) if !ring.is_full() => ring.enqueue(elem),
      | Backing::Compact(ring) => {
        let mut queue = VecDeque::with_capacity(ring.used() + 1);
        while !ring.is_empty() {
          if let Some(pending) = ring.dequeue() {
            queue.push_back(pending);
          }
        }
        queue.push_back(elem);
        self.backing = Backing::Expanded(queue);
      },
      | Backing::Expanded(queue) => queue.push_back(elem),
    }
  }

  /// Removes and returns the oldest element. Caller contract:
  /// `!self.is_empty()`; `None` only signals a contract violation.
  pub fn dequeue(&mut self) -> Option<T> {
    debug_assert!(!self.is_empty());
    match &mut self.backing {
      | Backing::Compact(ring) => ring.dequeue(),
      | Backing::Expanded(queue) => queue.pop_front(),
    }
  }

  /// Returns the oldest element without removing it.
  #[must_use]
  pub fn peek(&self) -> Option<&T> {
    match &self.backing {
      | Backing::Compact(ring) => ring.peek(),
      | Backing::Expanded(queue) => queue.front(),
    }
  }

  /// Discards the oldest element. Caller contract: `!self.is_empty()`.
  pub fn drop_head(&mut self) {
    debug_assert!(!self.is_empty());
    match &mut self.backing {
      | Backing::Compact(ring) => ring.drop_head(),
      | Backing::Expanded(queue) => {
        queue.pop_front();
      },
    }
  }

  /// Discards the newest element. Caller contract: `!self.is_empty()`.
  pub fn drop_tail(&mut self) {
    debug_assert!(!self.is_empty());
    match &mut self.backing {
      | Backing::Compact(ring) => ring.drop_tail(),
      | Backing::Expanded(queue) => {
        queue.pop_back();
      },
    }
  }

  /// Resets to empty, releasing every buffered element.
  pub fn clear(&mut self) {
    match &mut self.backing {
      | Backing::Compact(ring) => ring.clear(),
      | Backing::Expanded(queue) => queue.clear(),
    }
  }
}
