#[cfg(test)]
mod tests;

use std::marker::PhantomData;
use std::time::Duration;

use super::timeout_check_interval;
use crate::core::stage::{StageContext, StageLogic};
use crate::core::stream_error::{StreamError, TimeoutPolicy};
use crate::core::time::StreamInstant;
use crate::core::timer::TimerKey;

const CHECK_TIMER: TimerKey = TimerKey::from_raw(1);

/// Fails the stage when an emitted element is not followed by fresh
/// downstream demand within `timeout`.
///
/// The stage starts in the waiting state: a downstream that never pulls at
/// all trips the timeout `timeout` after start.
#[derive(Debug)]
pub struct BackpressureTimeout<T> {
  timeout:        Duration,
  deadline:       StreamInstant,
  waiting_demand: bool,
  _pd:            PhantomData<fn(T)>,
}

impl<T> BackpressureTimeout<T> {
  /// Creates the policy with the given `timeout`.
  #[must_use]
  pub const fn new(timeout: Duration) -> Self {
    Self { timeout, deadline: StreamInstant::ZERO, waiting_demand: true, _pd: PhantomData }
  }
}

impl<T> StageLogic<T> for BackpressureTimeout<T> {
  fn on_start(&mut self, ctx: &mut dyn StageContext<T>) {
    self.deadline = ctx.now().saturating_add(self.timeout);
    let interval = timeout_check_interval(self.timeout);
    ctx.schedule_with_fixed_delay(CHECK_TIMER, interval, interval);
  }

  fn on_push(&mut self, ctx: &mut dyn StageContext<T>) {
    let elem = ctx.grab();
    ctx.push(elem);
    self.deadline = ctx.now().saturating_add(self.timeout);
    self.waiting_demand = true;
  }

  fn on_pull(&mut self, ctx: &mut dyn StageContext<T>) {
    self.waiting_demand = false;
    ctx.pull();
  }

  fn on_timer(&mut self, ctx: &mut dyn StageContext<T>, key: TimerKey) {
    if key == CHECK_TIMER && self.waiting_demand && ctx.now().has_reached(self.deadline) {
      ctx.fail_stage(StreamError::TimeoutExceeded { policy: TimeoutPolicy::Backpressure, timeout: self.timeout });
    }
  }
}
