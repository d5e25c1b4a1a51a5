use sluice_streams_rs::core::{Buffer, StreamError, DEFAULT_MAX_FIXED_BUFFER_SIZE, FIXED_QUEUE_SIZE};

#[test]
fn small_boundaries_stay_on_fixed_rings() {
  assert!(matches!(Buffer::<u64>::with_capacity(16), Ok(Buffer::PowerOfTwo(_))));
  assert!(matches!(Buffer::<u64>::with_capacity(100), Ok(Buffer::Modulo(_))));
  assert!(matches!(Buffer::<u64>::with_capacity(FIXED_QUEUE_SIZE - 1), Ok(Buffer::Modulo(_))));
}

#[test]
fn large_boundaries_under_the_ceiling_stay_fixed() {
  let buffer = Buffer::<u64>::new(1 << 20, DEFAULT_MAX_FIXED_BUFFER_SIZE);
  assert!(matches!(buffer, Ok(Buffer::PowerOfTwo(_))));
}

#[test]
fn boundaries_at_or_over_the_ceiling_grow_lazily() {
  let buffer = Buffer::<u64>::new(512, 256);
  assert!(matches!(buffer, Ok(Buffer::Growable(_))));
}

#[test]
fn zero_capacity_is_rejected_up_front() {
  assert_eq!(Buffer::<u64>::with_capacity(0).unwrap_err(), StreamError::InvalidArgument("capacity"));
}

#[test]
fn drop_head_overflow_keeps_the_newest_elements() {
  let mut buffer = Buffer::with_capacity(4).unwrap();
  for elem in 0..4 {
    buffer.enqueue(elem);
  }
  // An arriving element on a full buffer evicts the oldest.
  assert!(buffer.is_full());
  buffer.drop_head();
  buffer.enqueue(4);
  let mut drained = Vec::new();
  while !buffer.is_empty() {
    drained.extend(buffer.dequeue());
  }
  assert_eq!(drained, vec![1, 2, 3, 4]);
}

#[test]
fn drop_tail_overflow_keeps_the_oldest_elements() {
  let mut buffer = Buffer::with_capacity(4).unwrap();
  for elem in 0..4 {
    buffer.enqueue(elem);
  }
  assert!(buffer.is_full());
  buffer.drop_tail();
  buffer.enqueue(9);
  let mut drained = Vec::new();
  while !buffer.is_empty() {
    drained.extend(buffer.dequeue());
  }
  assert_eq!(drained, vec![0, 1, 2, 9]);
}

#[test]
fn a_growable_boundary_honors_its_configured_capacity() {
  let mut buffer = Buffer::new(200, 100).unwrap();
  assert!(matches!(buffer, Buffer::Growable(_)));
  for elem in 0..200 {
    buffer.enqueue(elem);
  }
  assert!(buffer.is_full());
  assert_eq!(buffer.used(), 200);
  assert_eq!(buffer.capacity(), 200);
  assert_eq!(buffer.dequeue(), Some(0));
  assert!(!buffer.is_full());
}

#[test]
fn rate_decoupling_survives_interleaved_bursts() {
  let mut buffer = Buffer::with_capacity(8).unwrap();
  let mut produced = 0u64;
  let mut consumed = Vec::new();
  for round in 0..50 {
    let burst = (round % 5) + 1;
    for _ in 0..burst {
      if !buffer.is_full() {
        buffer.enqueue(produced);
        produced += 1;
      }
    }
    let drain = (round % 3) + 1;
    for _ in 0..drain {
      if !buffer.is_empty() {
        consumed.extend(buffer.dequeue());
      }
    }
  }
  while !buffer.is_empty() {
    consumed.extend(buffer.dequeue());
  }
  let expected: Vec<u64> = (0..produced).collect();
  assert_eq!(consumed, expected);
}
