
use std::marker::PhantomData;
use std::time::Duration;

use super::timeout_check_interval;
use crate::core::stage::{StageContext, StageLogic};
use crate::core::stream_error::{StreamError, TimeoutPolicy};
use crate::core::time::StreamInstant;
use crate::core::timer::TimerKey;

const CHECK_TIMER: TimerKey = TimerKey::from_raw(1);

/// Fails the stage when no element passes through for `timeout`.
///
/// The deadline is checked on a fixed-delay timer at the check interval
/// rather than rescheduled per element, so a busy stream pays one cheap
/// wake-up per interval instead of a timer churn per element.
#[derive(Debug)]
pub struct IdleTimeout<T> {
  timeout:  Duration,
  deadline: StreamInstant,
  _pd:      PhantomData<fn(T)>,
}

impl<T> IdleTimeout<T> {
  /// Creates the policy with the given `timeout`.
  #[must_use]
  pub const fn new(timeout: Duration) -> Self {
    Self { timeout, deadline: StreamInstant::ZERO, _pd: PhantomData }
  }
}

impl<T> StageLogic<T> for IdleTimeout<T> {
  fn on_start(&mut self, ctx: &mut dyn StageContext<T>) {
    self.deadline = ctx.now().saturating_add(self.timeout);
    let interval = timeout_check_interval(self.timeout);
    ctx.schedule_with_fixed_delay(CHECK_TIMER, interval, interval);
  }

  fn on_push(&mut self, ctx: &mut dyn StageContext<T>) {
    self.deadline = ctx.now().saturating_add(self.timeout);
    let elem = ctx.grab();
    ctx.push(elem);
  }

  fn on_timer(&mut self, ctx: &mut dyn StageContext<T>, key: TimerKey) {
    if key == CHECK_TIMER && ctx.now().has_reached(self.deadline) {
      ctx.fail_stage(StreamError::TimeoutExceeded { policy: TimeoutPolicy::Idle, timeout: self.timeout });
    }
  }
}
