use std::time::Duration;

use sluice_streams_rs::core::{
  BackpressureTimeout, BidiStageHarness, CompletionTimeout, DelayInitial, IdleInject, IdleTimeoutBidi, InitialTimeout,
  StageHarness, StreamError, TimeoutPolicy,
};

const TIMEOUT: Duration = Duration::from_secs(2);

#[test]
fn a_slow_producer_is_cut_off_before_the_first_element() {
  let mut harness = StageHarness::new(InitialTimeout::<u64>::new(TIMEOUT));
  harness.pull();
  harness.advance_time(Duration::from_secs(1));
  assert!(harness.failure().is_none());
  harness.advance_time(Duration::from_secs(1));
  assert_eq!(
    harness.failure(),
    Some(&StreamError::TimeoutExceeded { policy: TimeoutPolicy::Initial, timeout: TIMEOUT })
  );
  assert_eq!(harness.upstream_cancel(), harness.failure());
}

#[test]
fn a_bounded_request_completes_or_dies_on_schedule() {
  let mut harness = StageHarness::new(CompletionTimeout::new(TIMEOUT));
  harness.pull();
  harness.push("response");
  harness.complete_upstream();
  harness.advance_time(Duration::from_secs(10));
  assert!(harness.is_completed());
  assert!(harness.failure().is_none());
  assert_eq!(harness.emitted(), &["response"]);
}

#[test]
fn a_stalled_consumer_trips_backpressure_supervision() {
  let mut harness = StageHarness::new(BackpressureTimeout::new(TIMEOUT));
  harness.pull();
  harness.push(1u64);
  // Downstream goes quiet after the first element.
  harness.advance_time(TIMEOUT + Duration::from_secs(1));
  assert_eq!(
    harness.failure(),
    Some(&StreamError::TimeoutExceeded { policy: TimeoutPolicy::Backpressure, timeout: TIMEOUT })
  );
}

#[test]
fn keepalive_fillers_cover_idle_gaps_between_real_elements() {
  let mut harness = StageHarness::new(IdleInject::new(TIMEOUT, || 0u64));
  harness.pull();
  harness.push(10);
  harness.pull();
  harness.advance_time(TIMEOUT);
  harness.pull();
  harness.push(20);
  assert_eq!(harness.emitted(), &[10, 0, 20]);
  assert!(harness.failure().is_none());
}

#[test]
fn a_gated_start_releases_buffered_demand_and_then_flows() {
  let mut harness = StageHarness::new(DelayInitial::new(Duration::from_millis(500)));
  harness.pull();
  assert_eq!(harness.upstream_pulls(), 0);
  harness.advance_time(Duration::from_millis(500));
  assert_eq!(harness.upstream_pulls(), 1);
  harness.push('a');
  harness.pull();
  harness.push('b');
  assert_eq!(harness.emitted(), &['a', 'b']);
}

#[test]
fn a_quiet_link_fails_both_directions_at_once() {
  let mut harness = BidiStageHarness::new(IdleTimeoutBidi::<u64, u64>::new(TIMEOUT));
  harness.pull_forward();
  harness.push_forward(1);
  harness.advance_time(TIMEOUT);
  let expected = StreamError::TimeoutExceeded { policy: TimeoutPolicy::IdleBidi, timeout: TIMEOUT };
  assert_eq!(harness.failure(), Some(&expected));
  assert_eq!(harness.forward_cancel(), Some(&expected));
  assert_eq!(harness.reverse_cancel(), Some(&expected));
}
