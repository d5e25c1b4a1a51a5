
use std::time::Duration;

use crate::core::stage::{BidiStageContext, BidiStageLogic};
use crate::core::stream_error::StreamError;
use crate::core::time::StreamInstant;
use crate::core::timer::{TimerKey, TimerTable};

#[derive(Debug)]
struct PairState<T> {
  pending_in: Option<T>,
  demand_out: bool,
  pulls:      u64,
  emitted:    Vec<T>,
  completed:  bool,
  cancelled:  Option<StreamError>,
}

impl<T> PairState<T> {
  fn new() -> Self {
    Self { pending_in: None, demand_out: false, pulls: 0, emitted: Vec::new(), completed: false, cancelled: None }
  }

  fn is_terminal(&self) -> bool {
    self.completed || self.cancelled.is_some()
  }
}

#[derive(Debug)]
struct BidiHarnessContext<A, B> {
  clock:   StreamInstant,
  timers:  TimerTable,
  forward: PairState<A>,
  reverse: PairState<B>,
  failure: Option<StreamError>,
  stopped: bool,
}

impl<A, B> BidiHarnessContext<A, B> {
  fn new() -> Self {
    Self {
      clock:   StreamInstant::ZERO,
      timers:  TimerTable::new(),
      forward: PairState::new(),
      reverse: PairState::new(),
      failure: None,
      stopped: false,
    }
  }

  fn stop_if_both_terminal(&mut self) {
    if self.forward.is_terminal() && self.reverse.is_terminal() {
      self.stopped = true;
      self.timers.clear();
    }
  }
}

impl<A, B> BidiStageContext<A, B> for BidiHarnessContext<A, B> {
  fn now(&self) -> StreamInstant {
    self.clock
  }

  fn schedule_once(&mut self, key: TimerKey, delay: Duration) {
    self.timers.schedule_once(key, self.clock, delay);
  }

  fn schedule_with_fixed_delay(&mut self, key: TimerKey, initial_delay: Duration, interval: Duration) {
    self.timers.schedule_with_fixed_delay(key, self.clock, initial_delay, interval);
  }

  fn cancel_timer(&mut self, key: TimerKey) {
    self.timers.cancel(key);
  }

  fn grab_forward(&mut self) -> A {
    self.forward.pending_in.take().expect("grab_forward without a pushed element")
  }

  fn push_forward(&mut self, elem: A) {
    debug_assert!(self.forward.demand_out, "push_forward without outstanding demand");
    self.forward.demand_out = false;
    self.forward.emitted.push(elem);
  }

  fn pull_forward(&mut self) {
    self.forward.pulls += 1;
  }

  fn complete_forward(&mut self) {
    self.forward.completed = true;
    self.stop_if_both_terminal();
  }

  fn cancel_forward(&mut self, cause: StreamError) {
    self.forward.cancelled = Some(cause);
    self.stop_if_both_terminal();
  }

  fn grab_reverse(&mut self) -> B {
    self.reverse.pending_in.take().expect("grab_reverse without a pushed element")
  }

  fn push_reverse(&mut self, elem: B) {
    debug_assert!(self.reverse.demand_out, "push_reverse without outstanding demand");
    self.reverse.demand_out = false;
    self.reverse.emitted.push(elem);
  }

  fn pull_reverse(&mut self) {
    self.reverse.pulls += 1;
  }

  fn complete_reverse(&mut self) {
    self.reverse.completed = true;
    self.stop_if_both_terminal();
  }

  fn cancel_reverse(&mut self, cause: StreamError) {
    self.reverse.cancelled = Some(cause);
    self.stop_if_both_terminal();
  }

  fn fail_stage(&mut self, error: StreamError) {
    if !self.stopped {
      self.forward.cancelled = Some(error.clone());
      self.reverse.cancelled = Some(error.clone());
      self.failure = Some(error);
      self.stopped = true;
      self.timers.clear();
    }
  }
}

/// Hosts one [`BidiStageLogic`] on a virtual clock and records its signals
/// on both port pairs.
#[derive(Debug)]
pub struct BidiStageHarness<L, A, B>
where
  L: BidiStageLogic<A, B>, {
  logic:          L,
  ctx:            BidiHarnessContext<A, B>,
  stop_delivered: bool,
}

impl<L, A, B> BidiStageHarness<L, A, B>
where
  L: BidiStageLogic<A, B>,
{
  /// Creates the harness and delivers `on_start` to `logic`.
  #[must_use]
  pub fn new(logic: L) -> Self {
    let mut harness = Self { logic, ctx: BidiHarnessContext::new(), stop_delivered: false };
    harness.logic.on_start(&mut harness.ctx);
    harness.deliver_stop();
    harness
  }

  /// Delivers an element pushed on the forward inlet.
  pub fn push_forward(&mut self, elem: A) {
    self.ctx.forward.pending_in = Some(elem);
    self.logic.on_push_forward(&mut self.ctx);
    self.deliver_stop();
  }

  /// Delivers an element pushed on the reverse inlet.
  pub fn push_reverse(&mut self, elem: B) {
    self.ctx.reverse.pending_in = Some(elem);
    self.logic.on_push_reverse(&mut self.ctx);
    self.deliver_stop();
  }

  /// Delivers a demand signal on the forward outlet.
  pub fn pull_forward(&mut self) {
    self.ctx.forward.demand_out = true;
    self.logic.on_pull_forward(&mut self.ctx);
    self.deliver_stop();
  }

  /// Delivers a demand signal on the reverse outlet.
  pub fn pull_reverse(&mut self) {
    self.ctx.reverse.demand_out = true;
    self.logic.on_pull_reverse(&mut self.ctx);
    self.deliver_stop();
  }

  /// Advances the virtual clock by `delta`, firing due timers in deadline
  /// order with the clock pinned to each firing instant.
  pub fn advance_time(&mut self, delta: Duration) {
    let target = self.ctx.clock.saturating_add(delta);
    while let Some((key, fire_at)) = self.ctx.timers.pop_due(target) {
      self.ctx.clock = fire_at;
      self.logic.on_timer(&mut self.ctx, key);
      if self.ctx.stopped {
        break;
      }
    }
    self.ctx.clock = target;
    self.deliver_stop();
  }

  /// Returns every element pushed on the forward outlet, oldest first.
  #[must_use]
  pub fn forward_emitted(&self) -> &[A] {
    &self.ctx.forward.emitted
  }

  /// Returns every element pushed on the reverse outlet, oldest first.
  #[must_use]
  pub fn reverse_emitted(&self) -> &[B] {
    &self.ctx.reverse.emitted
  }

  /// Returns how many times the stage pulled the forward inlet.
  #[must_use]
  pub fn forward_pulls(&self) -> u64 {
    self.ctx.forward.pulls
  }

  /// Returns how many times the stage pulled the reverse inlet.
  #[must_use]
  pub fn reverse_pulls(&self) -> u64 {
    self.ctx.reverse.pulls
  }

  /// Returns the failure the stage signalled, if any.
  #[must_use]
  pub fn failure(&self) -> Option<&StreamError> {
    self.ctx.failure.as_ref()
  }

  /// Returns the cancellation propagated up the forward inlet, if any.
  #[must_use]
  pub fn forward_cancel(&self) -> Option<&StreamError> {
    self.ctx.forward.cancelled.as_ref()
  }

  /// Returns the cancellation propagated up the reverse inlet, if any.
  #[must_use]
  pub fn reverse_cancel(&self) -> Option<&StreamError> {
    self.ctx.reverse.cancelled.as_ref()
  }

  /// Returns true once the whole stage stopped.
  #[must_use]
  pub fn is_stopped(&self) -> bool {
    self.ctx.stopped
  }

  /// Returns the number of timers currently scheduled.
  #[must_use]
  pub fn scheduled_timers(&self) -> usize {
    self.ctx.timers.len()
  }

  /// Returns the current virtual time.
  #[must_use]
  pub fn now(&self) -> StreamInstant {
    self.ctx.clock
  }

  fn deliver_stop(&mut self) {
    if self.ctx.stopped && !self.stop_delivered {
      self.stop_delivered = true;
      self.logic.on_stop(&mut self.ctx);
    }
  }
}
