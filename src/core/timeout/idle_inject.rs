#[cfg(test)]
mod tests;

use std::time::Duration;

use crate::core::stage::{StageContext, StageLogic};
use crate::core::time::StreamInstant;
use crate::core::timer::TimerKey;

const INJECT_TIMER: TimerKey = TimerKey::from_raw(1);

/// Injects a filler element produced by `inject` whenever the stream stays
/// idle for `timeout` while downstream demand is outstanding.
///
/// The stage prefetches from upstream so a real element that arrives while
/// downstream is busy is parked in `pending` and wins over any filler. The
/// one-shot inject timer is scheduled for the exact remaining idle window, so
/// fillers appear on time rather than on the next periodic check.
pub struct IdleInject<T, F>
where
  F: FnMut() -> T, {
  timeout:  Duration,
  inject:   F,
  deadline: StreamInstant,
  pending:  Option<T>,
}

impl<T, F> IdleInject<T, F>
where
  F: FnMut() -> T,
{
  /// Creates the policy with the given idle `timeout` and filler factory.
  #[must_use]
  pub const fn new(timeout: Duration, inject: F) -> Self {
    Self { timeout, inject, deadline: StreamInstant::ZERO, pending: None }
  }

  fn reset_deadline(&mut self, now: StreamInstant) {
    self.deadline = now.saturating_add(self.timeout);
  }
}

impl<T, F> StageLogic<T> for IdleInject<T, F>
where
  F: FnMut() -> T,
{
  fn on_start(&mut self, ctx: &mut dyn StageContext<T>) {
    self.reset_deadline(ctx.now());
    ctx.pull();
  }

  fn on_push(&mut self, ctx: &mut dyn StageContext<T>) {
    let elem = ctx.grab();
    self.reset_deadline(ctx.now());
    ctx.cancel_timer(INJECT_TIMER);
    if ctx.is_out_available() {
      ctx.push(elem);
      ctx.pull();
    } else {
      self.pending = Some(elem);
    }
  }

  fn on_pull(&mut self, ctx: &mut dyn StageContext<T>) {
    if let Some(elem) = self.pending.take() {
      ctx.push(elem);
      if ctx.is_in_closed() {
        ctx.complete_stage();
      } else {
        ctx.pull();
      }
    } else if ctx.now().has_reached(self.deadline) {
      self.reset_deadline(ctx.now());
      let filler = (self.inject)();
      ctx.push(filler);
    } else {
      let remaining = ctx.now().remaining_until(self.deadline);
      ctx.schedule_once(INJECT_TIMER, remaining);
    }
  }

  fn on_upstream_finish(&mut self, ctx: &mut dyn StageContext<T>) {
    // A parked element still has to go downstream; completion happens when it
    // is emitted.
    if self.pending.is_none() {
      ctx.complete_stage();
    }
  }

  fn on_timer(&mut self, ctx: &mut dyn StageContext<T>, key: TimerKey) {
    if key != INJECT_TIMER {
      return;
    }
    if !ctx.now().has_reached(self.deadline) {
      // Fired early relative to the deadline; put the timer back for the
      // remainder instead of injecting ahead of time.
      let remaining = ctx.now().remaining_until(self.deadline);
      if !remaining.is_zero() {
        ctx.schedule_once(INJECT_TIMER, remaining);
      }
    } else if ctx.is_out_available() {
      self.reset_deadline(ctx.now());
      let filler = (self.inject)();
      ctx.push(filler);
    }
  }
}
