use std::time::Duration;

use super::InitialTimeout;
use crate::core::stream_error::{StreamError, TimeoutPolicy};
use crate::core::testkit::StageHarness;

const TIMEOUT: Duration = Duration::from_secs(1);

#[test]
fn fails_when_the_first_element_never_arrives() {
  let mut harness = StageHarness::new(InitialTimeout::<u32>::new(TIMEOUT));
  harness.advance_time(TIMEOUT);
  assert_eq!(
    harness.failure(),
    Some(&StreamError::TimeoutExceeded { policy: TimeoutPolicy::Initial, timeout: TIMEOUT })
  );
  assert!(harness.is_stopped());
}

#[test]
fn first_element_in_time_disarms_the_timeout() {
  let mut harness = StageHarness::new(InitialTimeout::new(TIMEOUT));
  harness.pull();
  harness.push(7);
  harness.advance_time(Duration::from_secs(10));
  assert!(harness.failure().is_none());
  assert_eq!(harness.emitted(), &[7]);
  assert!(!harness.is_stopped());
}

#[test]
fn later_idleness_is_not_supervised() {
  let mut harness = StageHarness::new(InitialTimeout::new(TIMEOUT));
  harness.pull();
  harness.advance_time(Duration::from_millis(900));
  harness.push(1);
  harness.advance_time(Duration::from_secs(60));
  assert!(harness.failure().is_none());
  assert_eq!(harness.emitted(), &[1]);
}
