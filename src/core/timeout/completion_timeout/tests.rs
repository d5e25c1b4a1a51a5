use std::time::Duration;

use super::CompletionTimeout;
use crate::core::stream_error::{StreamError, TimeoutPolicy};
use crate::core::testkit::StageHarness;

const TIMEOUT: Duration = Duration::from_secs(1);

#[test]
fn fails_at_the_deadline_even_while_elements_flow() {
  let mut harness = StageHarness::new(CompletionTimeout::new(TIMEOUT));
  harness.pull();
  harness.advance_time(Duration::from_millis(500));
  harness.push(1);
  harness.pull();
  harness.advance_time(Duration::from_millis(500));
  assert_eq!(
    harness.failure(),
    Some(&StreamError::TimeoutExceeded { policy: TimeoutPolicy::Completion, timeout: TIMEOUT })
  );
  assert_eq!(harness.emitted(), &[1]);
}

#[test]
fn completion_before_the_deadline_wins() {
  let mut harness = StageHarness::new(CompletionTimeout::<u32>::new(TIMEOUT));
  harness.advance_time(Duration::from_millis(999));
  harness.complete_upstream();
  harness.advance_time(Duration::from_secs(5));
  assert!(harness.failure().is_none());
  assert!(harness.is_completed());
}

#[test]
fn downstream_cancellation_before_the_deadline_wins() {
  let mut harness = StageHarness::new(CompletionTimeout::<u32>::new(TIMEOUT));
  harness.cancel_downstream(StreamError::Cancelled);
  harness.advance_time(Duration::from_secs(5));
  assert!(harness.failure().is_none());
  assert_eq!(harness.upstream_cancel(), Some(&StreamError::Cancelled));
}
