
use std::marker::PhantomData;
use std::time::Duration;

use crate::core::stage::{StageContext, StageLogic};
use crate::core::timer::TimerKey;

const DELAY_TIMER: TimerKey = TimerKey::from_raw(1);

/// Holds back the first demand signal for a fixed `delay`, then becomes a
/// pure pass-through. A zero delay opens the gate immediately.
///
/// This policy never fails; it only defers when upstream first sees demand.
#[derive(Debug)]
pub struct DelayInitial<T> {
  delay:        Duration,
  open:         bool,
  pending_pull: bool,
  _pd:          PhantomData<fn(T)>,
}

impl<T> DelayInitial<T> {
  /// Creates the policy with the given `delay`.
  #[must_use]
  pub const fn new(delay: Duration) -> Self {
    Self { delay, open: false, pending_pull: false, _pd: PhantomData }
  }
}

impl<T> StageLogic<T> for DelayInitial<T> {
  fn on_start(&mut self, ctx: &mut dyn StageContext<T>) {
    if self.delay.is_zero() {
      self.open = true;
    } else {
      ctx.schedule_once(DELAY_TIMER, self.delay);
    }
  }

  fn on_pull(&mut self, ctx: &mut dyn StageContext<T>) {
    if self.open {
      ctx.pull();
    } else {
      self.pending_pull = true;
    }
  }

  fn on_timer(&mut self, ctx: &mut dyn StageContext<T>, key: TimerKey) {
    if key != DELAY_TIMER {
      return;
    }
    self.open = true;
    if self.pending_pull {
      self.pending_pull = false;
      ctx.pull();
    }
  }
}
