
/// Fixed-capacity FIFO ring for arbitrary capacities, indexed by modulo.
///
/// Same cursor scheme as the power-of-two ring, with `cursor % capacity` in
/// place of the mask. Cursors are 64-bit and grow monotonically; at any
/// realistic enqueue rate they cannot wrap within the life of a process, so
/// the indices never need rebasing.
#[derive(Debug)]
pub struct ModuloRingBuffer<T> {
  slots: Box<[Option<T>]>,
  read:  u64,
  write: u64,
}

impl<T> ModuloRingBuffer<T> {
  /// Creates a ring holding up to `capacity` elements.
  ///
  /// # Panics
  ///
  /// Panics when `capacity` is zero.
  #[must_use]
  pub fn new(capacity: usize) -> Self {
    assert!(capacity > 0, "capacity must be positive");
    let slots = (0..capacity).map(|_| None).collect();
    Self { slots, read: 0, write: 0 }
  }

  /// Returns the number of buffered elements.
  #[must_use]
  pub const fn used(&self) -> usize {
    (self.write - self.read) as usize
  }

  /// Returns the fixed capacity.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.slots.len()
  }

  /// Returns true when no element is buffered.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.read == self.write
  }

  /// Returns true when `used` has reached the capacity.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.used() == self.capacity()
  }

  /// Appends `elem` at the write cursor. Caller contract: `!self.is_full()`.
  pub fn enqueue(&mut self, elem: T) {
    debug_assert!(!self.is_full());
    let index = self.index_of(self.write);
    self.slots[index] = Some(elem);
    self.write += 1;
  }

  /// Removes and returns the oldest element. Caller contract:
  /// `!self.is_empty()`; `None` only signals a contract violation.
  pub fn dequeue(&mut self) -> Option<T> {
    debug_assert!(!self.is_empty());
    let index = self.index_of(self.read);
    let elem = self.slots[index].take();
    if elem.is_some() {
      self.read += 1;
    }
    elem
  }

  /// Returns the oldest element without removing it.
  #[must_use]
  pub fn peek(&self) -> Option<&T> {
    self.slots[self.index_of(self.read)].as_ref()
  }

  /// Discards the oldest element. Caller contract: `!self.is_empty()`.
  pub fn drop_head(&mut self) {
    debug_assert!(!self.is_empty());
    let index = self.index_of(self.read);
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
    let index = self.index_of(self.write - 1);
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

  fn index_of(&self, cursor: u64) -> usize {
    (cursor % self.slots.len() as u64) as usize
  }
}
