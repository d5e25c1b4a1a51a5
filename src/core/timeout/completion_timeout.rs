#[cfg(test)]
mod tests;

use std::marker::PhantomData;
use std::time::Duration;

use crate::core::stage::{StageContext, StageLogic};
use crate::core::stream_error::{StreamError, TimeoutPolicy};
use crate::core::timer::TimerKey;

const TIMEOUT_TIMER: TimerKey = TimerKey::from_raw(1);

/// Fails the stage when it has not completed, successfully or not, within
/// `timeout` of stage start.
///
/// Reaching a terminal state cancels the timer with the stage, so the firing
/// only ever observes a stage that is still running.
#[derive(Debug)]
pub struct CompletionTimeout<T> {
  timeout: Duration,
  _pd:     PhantomData<fn(T)>,
}

impl<T> CompletionTimeout<T> {
  /// Creates the policy with the given `timeout`.
  #[must_use]
  pub const fn new(timeout: Duration) -> Self {
    Self { timeout, _pd: PhantomData }
  }
}

impl<T> StageLogic<T> for CompletionTimeout<T> {
  fn on_start(&mut self, ctx: &mut dyn StageContext<T>) {
    ctx.schedule_once(TIMEOUT_TIMER, self.timeout);
  }

  fn on_timer(&mut self, ctx: &mut dyn StageContext<T>, key: TimerKey) {
    if key == TIMEOUT_TIMER {
      ctx.fail_stage(StreamError::TimeoutExceeded { policy: TimeoutPolicy::Completion, timeout: self.timeout });
    }
  }
}
