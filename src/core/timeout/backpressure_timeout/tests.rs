use std::time::Duration;

use super::BackpressureTimeout;
use crate::core::stream_error::{StreamError, TimeoutPolicy};
use crate::core::testkit::StageHarness;

const TIMEOUT: Duration = Duration::from_secs(1);

fn backpressure_failure() -> StreamError {
  StreamError::TimeoutExceeded { policy: TimeoutPolicy::Backpressure, timeout: TIMEOUT }
}

#[test]
fn a_downstream_that_never_pulls_fails_after_start() {
  let mut harness = StageHarness::new(BackpressureTimeout::<u32>::new(TIMEOUT));
  harness.advance_time(TIMEOUT);
  assert_eq!(harness.failure(), Some(&backpressure_failure()));
}

#[test]
fn outstanding_demand_suspends_the_timeout() {
  let mut harness = StageHarness::new(BackpressureTimeout::<u32>::new(TIMEOUT));
  harness.pull();
  harness.advance_time(Duration::from_secs(30));
  assert!(harness.failure().is_none());
}

#[test]
fn an_unanswered_emission_fails_after_the_timeout() {
  let mut harness = StageHarness::new(BackpressureTimeout::new(TIMEOUT));
  harness.pull();
  harness.advance_time(Duration::from_millis(300));
  harness.push(1);
  // The deadline lands between check firings; the next one detects it.
  harness.advance_time(TIMEOUT + Duration::from_millis(100));
  assert_eq!(harness.failure(), Some(&backpressure_failure()));
  assert_eq!(harness.emitted(), &[1]);
}

#[test]
fn prompt_demand_after_each_emission_keeps_the_stage_alive() {
  let mut harness = StageHarness::new(BackpressureTimeout::new(TIMEOUT));
  harness.pull();
  for elem in 0..5 {
    harness.advance_time(Duration::from_millis(400));
    harness.push(elem);
    harness.pull();
  }
  harness.advance_time(Duration::from_secs(10));
  assert!(harness.failure().is_none());
  assert_eq!(harness.emitted(), &[0, 1, 2, 3, 4]);
}
