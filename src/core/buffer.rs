//! Boundary buffers that decouple the rates of two stages.
//!
//! Every strategy is a strict FIFO over a fixed capacity. The operations are
//! caller-contract checked only: enqueueing into a full buffer or consuming
//! from an empty one is a bug in the caller, guarded by `debug_assert!`
//! rather than a runtime error path.


/// Bounded buffer that grows from a compact ring into a queue.
mod growable_buffer;
/// Ring buffer with arbitrary capacity and modulo indexing.
mod modulo_ring_buffer;
/// Ring buffer with power-of-two capacity and masked indexing.
mod pow2_ring_buffer;

pub use growable_buffer::GrowableBuffer;
pub use modulo_ring_buffer::ModuloRingBuffer;
pub use pow2_ring_buffer::Pow2RingBuffer;

use crate::core::stream_error::StreamError;

/// Capacity of the compact ring inside a growable buffer, and the bound below
/// which the factory always hands out a fixed ring.
pub const FIXED_QUEUE_SIZE: usize = 128;

/// Default ceiling below which requested capacities stay on fixed rings.
pub const DEFAULT_MAX_FIXED_BUFFER_SIZE: usize = 1_000_000_000;

/// Boundary buffer with a strategy fixed at construction.
///
/// The strategy set is closed so the hot path stays a single match on a
/// variant chosen once, not a dynamic dispatch re-evaluated per call.
#[derive(Debug)]
pub enum Buffer<T> {
  /// Fixed ring with masked indexing.
  PowerOfTwo(Pow2RingBuffer<T>),
  /// Fixed ring with modulo indexing.
  Modulo(ModuloRingBuffer<T>),
  /// Compact ring promoted to a queue on saturation.
  Growable(GrowableBuffer<T>),
}

impl<T> Buffer<T> {
  /// Selects a strategy for `capacity` under the `max_fixed_buffer_size`
  /// ceiling.
  ///
  /// Small or sub-ceiling capacities are served by a non-growing ring, which
  /// is cheap to keep simple and fixed; capacities at or above both bounds
  /// get a growable buffer that avoids eagerly allocating `capacity` slots.
  ///
  /// # Errors
  ///
  /// Returns [`StreamError::InvalidArgument`] when `capacity` is zero.
  pub fn new(capacity: usize, max_fixed_buffer_size: usize) -> Result<Self, StreamError> {
    if capacity == 0 {
      return Err(StreamError::InvalidArgument("capacity"));
    }
    if capacity < FIXED_QUEUE_SIZE || capacity < max_fixed_buffer_size {
      Ok(Self::fixed(capacity))
    } else {
      Ok(Self::Growable(GrowableBuffer::new(capacity)))
    }
  }

  /// Selects a strategy for `capacity` under the default ceiling.
  ///
  /// # Errors
  ///
  /// Returns [`StreamError::InvalidArgument`] when `capacity` is zero.
  pub fn with_capacity(capacity: usize) -> Result<Self, StreamError> {
    Self::new(capacity, DEFAULT_MAX_FIXED_BUFFER_SIZE)
  }

  fn fixed(capacity: usize) -> Self {
    if capacity.is_power_of_two() {
      Self::PowerOfTwo(Pow2RingBuffer::new(capacity))
    } else {
      Self::Modulo(ModuloRingBuffer::new(capacity))
    }
  }

  /// Appends `elem` at the write cursor. Caller contract: `!self.is_full()`.
  pub fn enqueue(&mut self, elem: T) {
    match self {
      | Self::PowerOfTwo(ring) => ring.enqueue(elem),
      | Self::Modulo(ring) => ring.enqueue(elem),
      | Self::Growable(buffer) => buffer.enqueue(elem),
    }
  }

  /// Removes and returns the oldest element. Caller contract:
  /// `!self.is_empty()`; `None` only signals a contract violation.
  pub fn dequeue(&mut self) -> Option<T> {
    match self {
      | Self::PowerOfTwo(ring) => ring.dequeue(),
      | Self::Modulo(ring) => ring.dequeue(),
      | Self::Growable(buffer) => buffer.dequeue(),
    }
  }

  /// Returns the oldest element without removing it.
  #[must_use]
  pub fn peek(&self) -> Option<&T> {
    match self {
      | Self::PowerOfTwo(ring) => ring.peek(),
      | Self::Modulo(ring) => ring.peek(),
      | Self::Growable(buffer) => buffer.peek(),
    }
  }

  /// Discards the oldest element. Caller contract: `!self.is_empty()`.
  pub fn drop_head(&mut self) {
    match self {
      | Self::PowerOfTwo(ring) => ring.drop_head(),
      | Self::Modulo(ring) => ring.drop_head(),
      | Self::Growable(buffer) => buffer.drop_head(),
    }
  }

  /// Discards the newest element. Caller contract: `!self.is_empty()`.
  pub fn drop_tail(&mut self) {
    match self {
      | Self::PowerOfTwo(ring) => ring.drop_tail(),
      | Self::Modulo(ring) => ring.drop_tail(),
      | Self::Growable(buffer) => buffer.drop_tail(),
    }
  }

  /// Resets to empty, releasing every buffered element.
  pub fn clear(&mut self) {
    match self {
      | Self::PowerOfTwo(ring) => ring.clear(),
      | Self::Modulo(ring) => ring.clear(),
      | Self::Growable(buffer) => buffer.clear(),
    }
  }

  /// Returns the number of buffered elements.
  #[must_use]
  pub fn used(&self) -> usize {
    match self {
      | Self::PowerOfTwo(ring) => ring.used(),
      | Self::Modulo(ring) => ring.used(),
      | Self::Growable(buffer) => buffer.used(),
    }
  }

  /// Returns the capacity fixed at construction.
  #[must_use]
  pub fn capacity(&self) -> usize {
    match self {
      | Self::PowerOfTwo(ring) => ring.capacity(),
      | Self::Modulo(ring) => ring.capacity(),
      | Self::Growable(buffer) => buffer.capacity(),
    }
  }

  /// Returns true when no element is buffered.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.used() == 0
  }

  /// Returns true when `used` has reached the capacity.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.used() == self.capacity()
  }
}
