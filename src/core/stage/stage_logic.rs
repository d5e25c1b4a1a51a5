use super::StageContext;
use crate::core::stream_error::StreamError;
use crate::core::timer::TimerKey;

/// Event handlers for a linear stage.
///
/// Every handler runs to completion before the host dispatches the next
/// event. The defaults implement a pure pass-through stage: pushed elements
/// are forwarded downstream, demand is forwarded upstream, and terminal
/// signals propagate.
pub trait StageLogic<T> {
  /// Called once before any other event.
  fn on_start(&mut self, _ctx: &mut dyn StageContext<T>) {}

  /// Called when upstream has pushed an element.
  fn on_push(&mut self, ctx: &mut dyn StageContext<T>) {
    let elem = ctx.grab();
    ctx.push(elem);
  }

  /// Called when downstream signals demand.
  fn on_pull(&mut self, ctx: &mut dyn StageContext<T>) {
    ctx.pull();
  }

  /// Called when upstream completes.
  fn on_upstream_finish(&mut self, ctx: &mut dyn StageContext<T>) {
    ctx.complete_stage();
  }

  /// Called when downstream cancels.
  fn on_downstream_cancel(&mut self, ctx: &mut dyn StageContext<T>, cause: StreamError) {
    ctx.cancel_stage(cause);
  }

  /// Called when a scheduled timer fires.
  fn on_timer(&mut self, _ctx: &mut dyn StageContext<T>, _key: TimerKey) {}

  /// Called once after the stage reaches a terminal state.
  fn on_stop(&mut self, _ctx: &mut dyn StageContext<T>) {}
}
