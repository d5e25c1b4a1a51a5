use std::time::Duration;

use super::{IdleInject, INJECT_TIMER};
use crate::core::testkit::StageHarness;

const TIMEOUT: Duration = Duration::from_secs(1);

fn filler() -> impl FnMut() -> u32 {
  || 99
}

#[test]
fn the_stage_prefetches_on_start() {
  let harness = StageHarness::new(IdleInject::new(TIMEOUT, filler()));
  assert_eq!(harness.upstream_pulls(), 1);
  assert_eq!(harness.scheduled_timers(), 0);
}

#[test]
fn real_elements_pass_through_and_refetch() {
  let mut harness = StageHarness::new(IdleInject::new(TIMEOUT, filler()));
  harness.pull();
  harness.push(5);
  assert_eq!(harness.emitted(), &[5]);
  assert_eq!(harness.upstream_pulls(), 2);
  assert_eq!(harness.scheduled_timers(), 0);
}

#[test]
fn an_idle_window_injects_a_filler_on_time() {
  let mut harness = StageHarness::new(IdleInject::new(TIMEOUT, filler()));
  harness.pull();
  assert_eq!(harness.scheduled_timers(), 1);
  harness.advance_time(TIMEOUT);
  assert_eq!(harness.emitted(), &[99]);
  assert!(harness.failure().is_none());
}

#[test]
fn fillers_repeat_while_the_stream_stays_idle() {
  let mut counter = 0;
  let mut harness = StageHarness::new(IdleInject::new(TIMEOUT, move || {
    counter += 1;
    counter
  }));
  harness.pull();
  harness.advance_time(TIMEOUT);
  harness.pull();
  harness.advance_time(TIMEOUT);
  assert_eq!(harness.emitted(), &[1, 2]);
}

#[test]
fn a_parked_element_wins_over_the_filler() {
  let mut harness = StageHarness::new(IdleInject::new(TIMEOUT, filler()));
  harness.push(1);
  harness.advance_time(Duration::from_secs(5));
  harness.pull();
  assert_eq!(harness.emitted(), &[1]);
  assert_eq!(harness.upstream_pulls(), 2);
}

#[test]
fn upstream_finish_waits_for_the_parked_element() {
  let mut harness = StageHarness::new(IdleInject::new(TIMEOUT, filler()));
  harness.push(1);
  harness.complete_upstream();
  assert!(!harness.is_completed());
  harness.pull();
  assert_eq!(harness.emitted(), &[1]);
  assert!(harness.is_completed());
}

#[test]
fn upstream_finish_with_nothing_parked_completes_immediately() {
  let mut harness = StageHarness::new(IdleInject::new(TIMEOUT, filler()));
  harness.complete_upstream();
  assert!(harness.is_completed());
}

#[test]
fn an_early_firing_reschedules_for_the_remainder() {
  let mut harness = StageHarness::new(IdleInject::new(TIMEOUT, filler()));
  harness.pull();
  harness.fire_timer(INJECT_TIMER);
  assert!(harness.emitted().is_empty());
  assert_eq!(harness.scheduled_timers(), 1);
  harness.advance_time(TIMEOUT);
  assert_eq!(harness.emitted(), &[99]);
}

#[test]
fn a_push_cancels_the_pending_injection() {
  let mut harness = StageHarness::new(IdleInject::new(TIMEOUT, filler()));
  harness.pull();
  harness.advance_time(Duration::from_millis(900));
  harness.push(3);
  assert_eq!(harness.scheduled_timers(), 0);
  harness.pull();
  harness.advance_time(Duration::from_millis(200));
  assert_eq!(harness.emitted(), &[3]);
}
