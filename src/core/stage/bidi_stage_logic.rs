use super::BidiStageContext;
use crate::core::stream_error::StreamError;
use crate::core::timer::TimerKey;

/// Event handlers for a bidirectional stage.
///
/// The defaults pass both directions through untouched and let each pair
/// complete or cancel independently.
pub trait BidiStageLogic<A, B> {
  /// Called once before any other event.
  fn on_start(&mut self, _ctx: &mut dyn BidiStageContext<A, B>) {}

  /// Called when an element arrives on the forward inlet.
  fn on_push_forward(&mut self, ctx: &mut dyn BidiStageContext<A, B>) {
    let elem = ctx.grab_forward();
    ctx.push_forward(elem);
  }

  /// Called when the forward outlet signals demand.
  fn on_pull_forward(&mut self, ctx: &mut dyn BidiStageContext<A, B>) {
    ctx.pull_forward();
  }

  /// Called when the forward upstream completes.
  fn on_forward_finish(&mut self, ctx: &mut dyn BidiStageContext<A, B>) {
    ctx.complete_forward();
  }

  /// Called when the forward downstream cancels.
  fn on_forward_cancel(&mut self, ctx: &mut dyn BidiStageContext<A, B>, cause: StreamError) {
    ctx.cancel_forward(cause);
  }

  /// Called when an element arrives on the reverse inlet.
  fn on_push_reverse(&mut self, ctx: &mut dyn BidiStageContext<A, B>) {
    let elem = ctx.grab_reverse();
    ctx.push_reverse(elem);
  }

  /// Called when the reverse outlet signals demand.
  fn on_pull_reverse(&mut self, ctx: &mut dyn BidiStageContext<A, B>) {
    ctx.pull_reverse();
  }

  /// Called when the reverse upstream completes.
  fn on_reverse_finish(&mut self, ctx: &mut dyn BidiStageContext<A, B>) {
    ctx.complete_reverse();
  }

  /// Called when the reverse downstream cancels.
  fn on_reverse_cancel(&mut self, ctx: &mut dyn BidiStageContext<A, B>, cause: StreamError) {
    ctx.cancel_reverse(cause);
  }

  /// Called when a scheduled timer fires.
  fn on_timer(&mut self, _ctx: &mut dyn BidiStageContext<A, B>, _key: TimerKey) {}

  /// Called once after the stage reaches a terminal state.
  fn on_stop(&mut self, _ctx: &mut dyn BidiStageContext<A, B>) {}
}
