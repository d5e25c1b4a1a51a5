
use std::marker::PhantomData;
use std::time::Duration;

use super::timeout_check_interval;
use crate::core::stage::{BidiStageContext, BidiStageLogic};
use crate::core::stream_error::{StreamError, TimeoutPolicy};
use crate::core::time::StreamInstant;
use crate::core::timer::TimerKey;

const CHECK_TIMER: TimerKey = TimerKey::from_raw(1);

/// Fails a bidirectional stage when neither direction carries an element for
/// `timeout`.
///
/// Both port pairs share one deadline; traffic on either pair refreshes it,
/// and a violation tears down the whole stage, not just the quiet side.
#[derive(Debug)]
pub struct IdleTimeoutBidi<A, B> {
  timeout:  Duration,
  deadline: StreamInstant,
  _pd:      PhantomData<fn(A, B)>,
}

impl<A, B> IdleTimeoutBidi<A, B> {
  /// Creates the policy with the given `timeout`.
  #[must_use]
  pub const fn new(timeout: Duration) -> Self {
    Self { timeout, deadline: StreamInstant::ZERO, _pd: PhantomData }
  }

  fn on_activity(&mut self, now: StreamInstant) {
    self.deadline = now.saturating_add(self.timeout);
  }
}

impl<A, B> BidiStageLogic<A, B> for IdleTimeoutBidi<A, B> {
  fn on_start(&mut self, ctx: &mut dyn BidiStageContext<A, B>) {
    self.on_activity(ctx.now());
    let interval = timeout_check_interval(self.timeout);
    ctx.schedule_with_fixed_delay(CHECK_TIMER, interval, interval);
  }

  fn on_push_forward(&mut self, ctx: &mut dyn BidiStageContext<A, B>) {
    self.on_activity(ctx.now());
    let elem = ctx.grab_forward();
    ctx.push_forward(elem);
  }

  fn on_push_reverse(&mut self, ctx: &mut dyn BidiStageContext<A, B>) {
    self.on_activity(ctx.now());
    let elem = ctx.grab_reverse();
    ctx.push_reverse(elem);
  }

  fn on_timer(&mut self, ctx: &mut dyn BidiStageContext<A, B>, key: TimerKey) {
    if key == CHECK_TIMER && ctx.now().has_reached(self.deadline) {
      ctx.fail_stage(StreamError::TimeoutExceeded { policy: TimeoutPolicy::IdleBidi, timeout: self.timeout });
    }
  }
}
