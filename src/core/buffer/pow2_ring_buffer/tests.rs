use super::Pow2RingBuffer;

#[test]
fn preserves_fifo_order_across_wrap_around() {
  let mut ring = Pow2RingBuffer::new(4);
  ring.enqueue('A');
  ring.enqueue('B');
  ring.enqueue('C');
  ring.enqueue('D');
  assert_eq!(ring.dequeue(), Some('A'));
  ring.enqueue('E');
  assert_eq!(ring.dequeue(), Some('B'));
  assert_eq!(ring.dequeue(), Some('C'));
  assert_eq!(ring.dequeue(), Some('D'));
  assert_eq!(ring.dequeue(), Some('E'));
  assert!(ring.is_empty());
}

#[test]
fn used_tracks_cursor_distance() {
  let mut ring = Pow2RingBuffer::new(2);
  assert_eq!(ring.used(), 0);
  ring.enqueue(1);
  assert_eq!(ring.used(), 1);
  ring.enqueue(2);
  assert!(ring.is_full());
  ring.drop_head();
  assert_eq!(ring.used(), 1);
}

#[test]
fn peek_does_not_consume() {
  let mut ring = Pow2RingBuffer::new(4);
  ring.enqueue(10);
  ring.enqueue(20);
  assert_eq!(ring.peek(), Some(&10));
  assert_eq!(ring.peek(), Some(&10));
  assert_eq!(ring.dequeue(), Some(10));
  assert_eq!(ring.peek(), Some(&20));
}

#[test]
fn drop_tail_discards_the_newest() {
  let mut ring = Pow2RingBuffer::new(4);
  ring.enqueue(1);
  ring.enqueue(2);
  ring.enqueue(3);
  ring.drop_tail();
  assert_eq!(ring.dequeue(), Some(1));
  assert_eq!(ring.dequeue(), Some(2));
  assert!(ring.is_empty());
}

#[test]
fn clear_resets_and_releases() {
  let mut ring = Pow2RingBuffer::new(4);
  ring.enqueue(String::from("a"));
  ring.enqueue(String::from("b"));
  ring.clear();
  assert!(ring.is_empty());
  ring.enqueue(String::from("c"));
  assert_eq!(ring.dequeue(), Some(String::from("c")));
}

#[test]
#[should_panic(expected = "capacity must be a power of two")]
fn rejects_non_power_of_two_capacity() {
  let _ = Pow2RingBuffer::<u32>::new(6);
}

#[test]
#[should_panic(expected = "capacity must be a power of two")]
fn rejects_zero_capacity() {
  let _ = Pow2RingBuffer::<u32>::new(0);
}
