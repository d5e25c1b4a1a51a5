use std::time::Duration;

use super::timeout_check_interval;

#[test]
fn long_timeouts_poll_at_one_second() {
  assert_eq!(timeout_check_interval(Duration::from_secs(10)), Duration::from_secs(1));
  assert_eq!(timeout_check_interval(Duration::from_secs(60)), Duration::from_secs(1));
}

#[test]
fn mid_range_timeouts_poll_at_an_eighth() {
  assert_eq!(timeout_check_interval(Duration::from_secs(2)), Duration::from_millis(250));
  assert_eq!(timeout_check_interval(Duration::from_secs(4)), Duration::from_millis(500));
}

#[test]
fn short_timeouts_are_floored_at_a_hundred_millis() {
  assert_eq!(timeout_check_interval(Duration::from_millis(400)), Duration::from_millis(100));
}

#[test]
fn the_interval_never_exceeds_half_the_timeout() {
  assert_eq!(timeout_check_interval(Duration::from_millis(160)), Duration::from_millis(80));
  assert_eq!(timeout_check_interval(Duration::from_millis(50)), Duration::from_millis(25));
}
