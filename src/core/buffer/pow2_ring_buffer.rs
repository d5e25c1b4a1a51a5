#[cfg(test)]
mod tests;

/// Fixed-capacity FIFO ring with a power-of-two capacity and masked indexing.
///
/// Read and write cursors grow monotonically; the physical slot is
/// `cursor & (capacity - 1)`, so the hot path is branch-free. Vacated slots
/// are set back to `None` so no discarded element is retained.
#[derive(Debug)]
pub struct Pow2RingBuffer<T> {
  slots: Box<[Option<T>]>,
  mask:  u64,
  read:  u64,
  write: u64,
}

impl<T> Pow2RingBuffer<T> {
  /// Creates a ring holding up to `capacity` elements.
  ///
  /// # Panics
  ///
  /// Panics when `capacity` is zero or not a power of two.
  #[must_use]
  pub fn new(capacity: usize) -> Self {
    assert!(capacity.is_power_of_two(), "capacity must be a power of two");
    let slots = (0..capacity).map(|_| None).collect();
    Self { slots, mask: capacity as u64 - 1, read: 0, write: 0 }
  }

  /// Returns the number of buffered elements.
  #[must_use]
  pub const fn used(&self) -> usize {
    (self.write - self.read) as usize
  }

  /// Returns the fixed capacity.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.mask as usize + 1
  }

  /// Returns true when no element is buffered.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.read == self.write
  }

  /// Returns true when `used` has reached the capacity.
  #[must_use]
  pub const fn is_full(&self) -> bool {
    self.used() == self.capacity()
  }

  /// Appends `elem` at the write cursor. Caller contract: `!self.is_full()`.
  pub fn enqueue(&mut self, elem: T) {
    debug_assert!(!self.is_full());
    let index = (self.write & self.mask) as usize;
    self.slots[index] = Some(elem);
    self.write += 1;
  }

  /// Removes and returns the oldest element. Caller contract:
  /// `!self.is_empty()`; `None` only signals a contract violation.
  pub fn dequeue(&mut self) -> Option<T> {
    debug_assert!(!self.is_empty());
    let index = (self.read & self.mask) as usize;
    let elem = self.slots[index].take();
    if elem.is_some() {
      self.read += 1;
    }
    elem
  }

  /// Returns the oldest element without removing it.
  #[must_use]
  pub fn peek(&self) -> Option<&T> {
    self.slots[(self.read & self.mask) as usize].as_ref()
  }

  /// Discards the oldest element. Caller contract: `!self.is_empty()`.
  pub fn drop_head(&mut self) {
    debug_assert!(!self.is_empty());
    let index = (self.read & self.mask) as usize;
    if self.slots[index].take().is_some() {
      self.read += 1;
    }
  }

  /// Discards the newest element. Caller contract: `!self.is_empty()`.
  pub fn drop_tail(&mut self) {
    debug_assert!(!self.is_empty());
    if self.write == self.read {
      return;
    }
    let index = ((self.write - 1) & self.mask) as usize;
    self.slots[index] = None;
    self.write -= 1;
  }

  /// Resets to empty, releasing every buffered element.
  pub fn clear(&mut self) {
    for slot in self.slots.iter_mut() {
      *slot = None;
    }
    self.read = 0;
    self.write = 0;
  }
}
