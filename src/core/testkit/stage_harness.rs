
use std::time::Duration;

use crate::core::stage::{StageContext, StageLogic};
use crate::core::stream_error::StreamError;
use crate::core::time::StreamInstant;
use crate::core::timer::{TimerKey, TimerTable};

#[derive(Debug)]
struct HarnessContext<T> {
  clock:              StreamInstant,
  timers:             TimerTable,
  pending_in:         Option<T>,
  demand_out:         bool,
  pulls:              u64,
  emitted:            Vec<T>,
  completed:          bool,
  failure:            Option<StreamError>,
  upstream_cancelled: Option<StreamError>,
  in_closed:          bool,
  stopped:            bool,
}

impl<T> HarnessContext<T> {
  fn new() -> Self {
    Self {
      clock:              StreamInstant::ZERO,
      timers:             TimerTable::new(),
      pending_in:         None,
      demand_out:         false,
      pulls:              0,
      emitted:            Vec::new(),
      completed:          false,
      failure:            None,
      upstream_cancelled: None,
      in_closed:          false,
      stopped:            false,
    }
  }

  fn stop(&mut self) {
    self.stopped = true;
    self.timers.clear();
  }
}

impl<T> StageContext<T> for HarnessContext<T> {
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

  fn grab(&mut self) -> T {
    self.pending_in.take().expect("grab without a pushed element")
  }

  fn push(&mut self, elem: T) {
    debug_assert!(self.demand_out, "push without outstanding demand");
    self.demand_out = false;
    self.emitted.push(elem);
  }

  fn pull(&mut self) {
    self.pulls += 1;
  }

  fn is_out_available(&self) -> bool {
    self.demand_out
  }

  fn is_in_closed(&self) -> bool {
    self.in_closed
  }

  fn complete_stage(&mut self) {
    if !self.stopped {
      self.completed = true;
      self.stop();
    }
  }

  fn fail_stage(&mut self, error: StreamError) {
    if !self.stopped {
      self.upstream_cancelled = Some(error.clone());
      self.failure = Some(error);
      self.stop();
    }
  }

  fn cancel_stage(&mut self, cause: StreamError) {
    if !self.stopped {
      self.upstream_cancelled = Some(cause);
      self.stop();
    }
  }
}

/// Hosts one [`StageLogic`] on a virtual clock and records its signals.
///
/// The harness is the stage's upstream, downstream, and timer service at
/// once. Driver methods deliver exactly one event and return once the logic's
/// handler has run, so assertions between calls observe a quiescent stage.
#[derive(Debug)]
pub struct StageHarness<L, T>
where
  L: StageLogic<T>, {
  logic:          L,
  ctx:            HarnessContext<T>,
  stop_delivered: bool,
}

impl<L, T> StageHarness<L, T>
where
  L: StageLogic<T>,
{
  /// Creates the harness and delivers `on_start` to `logic`.
  #[must_use]
  pub fn new(logic: L) -> Self {
    let mut harness = Self { logic, ctx: HarnessContext::new(), stop_delivered: false };
    harness.logic.on_start(&mut harness.ctx);
    harness.deliver_stop();
    harness
  }

  /// Delivers an element pushed by upstream.
  pub fn push(&mut self, elem: T) {
    self.ctx.pending_in = Some(elem);
    self.logic.on_push(&mut self.ctx);
    self.deliver_stop();
  }

  /// Delivers a demand signal from downstream.
  pub fn pull(&mut self) {
    self.ctx.demand_out = true;
    self.logic.on_pull(&mut self.ctx);
    self.deliver_stop();
  }

  /// Delivers upstream completion.
  pub fn complete_upstream(&mut self) {
    self.ctx.in_closed = true;
    self.logic.on_upstream_finish(&mut self.ctx);
    self.deliver_stop();
  }

  /// Delivers downstream cancellation with `cause`.
  pub fn cancel_downstream(&mut self, cause: StreamError) {
    self.logic.on_downstream_cancel(&mut self.ctx, cause);
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

  /// Fires the timer identified by `key` now, regardless of its deadline.
  ///
  /// Models a host clock misbehaving; the entry is retired first so the logic
  /// observes the firing the way a real early wake-up would look.
  pub fn fire_timer(&mut self, key: TimerKey) {
    self.ctx.timers.cancel(key);
    self.logic.on_timer(&mut self.ctx, key);
    self.deliver_stop();
  }

  /// Returns every element the stage pushed downstream, oldest first.
  #[must_use]
  pub fn emitted(&self) -> &[T] {
    &self.ctx.emitted
  }

  /// Returns how many times the stage pulled upstream.
  #[must_use]
  pub fn upstream_pulls(&self) -> u64 {
    self.ctx.pulls
  }

  /// Returns the failure the stage signalled downstream, if any.
  #[must_use]
  pub fn failure(&self) -> Option<&StreamError> {
    self.ctx.failure.as_ref()
  }

  /// Returns the cancellation the stage propagated upstream, if any.
  #[must_use]
  pub fn upstream_cancel(&self) -> Option<&StreamError> {
    self.ctx.upstream_cancelled.as_ref()
  }

  /// Returns true once the stage completed downstream.
  #[must_use]
  pub fn is_completed(&self) -> bool {
    self.ctx.completed
  }

  /// Returns true once the stage reached any terminal state.
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
