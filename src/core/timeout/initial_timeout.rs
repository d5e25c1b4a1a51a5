#[cfg(test)]
mod tests;

use std::marker::PhantomData;
use std::time::Duration;

use crate::core::stage::{StageContext, StageLogic};
use crate::core::stream_error::{StreamError, TimeoutPolicy};
use crate::core::timer::TimerKey;

const TIMEOUT_TIMER: TimerKey = TimerKey::from_raw(1);

/// Fails the stage when the first element does not arrive within `timeout`
/// of stage start. Once the first element has passed, the stage is a pure
/// pass-through.
#[derive(Debug)]
pub struct InitialTimeout<T> {
  timeout:      Duration,
  first_passed: bool,
  _pd:          PhantomData<fn(T)>,
}

impl<T> InitialTimeout<T> {
  /// Creates the policy with the given `timeout`.
  #[must_use]
  pub const fn new(timeout: Duration) -> Self {
    Self { timeout, first_passed: false, _pd: PhantomData }
  }
}

impl<T> StageLogic<T> for InitialTimeout<T> {
  fn on_start(&mut self, ctx: &mut dyn StageContext<T>) {
    ctx.schedule_once(TIMEOUT_TIMER, self.timeout);
  }

  fn on_push(&mut self, ctx: &mut dyn StageContext<T>) {
    self.first_passed = true;
    let elem = ctx.grab();
    ctx.push(elem);
  }

  fn on_timer(&mut self, ctx: &mut dyn StageContext<T>, key: TimerKey) {
    if key == TIMEOUT_TIMER && !self.first_passed {
      ctx.fail_stage(StreamError::TimeoutExceeded { policy: TimeoutPolicy::Initial, timeout: self.timeout });
    }
  }
}
