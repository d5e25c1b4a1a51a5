use std::time::Duration;

use crate::core::stream_error::StreamError;
use crate::core::time::StreamInstant;
use crate::core::timer::TimerKey;

/// Host-runtime services available to a bidirectional stage.
///
/// A bidi stage owns two independent port pairs: the forward pair carries `A`
/// from its left upstream to its right downstream, the reverse pair carries
/// `B` the other way. Timers and terminal transitions are shared by the whole
/// stage; completing or cancelling one pair leaves the other running, while
/// `fail_stage` tears down both at once.
pub trait BidiStageContext<A, B> {
  /// Returns the current monotonic time.
  fn now(&self) -> StreamInstant;

  /// Schedules a one-shot timer identified by `key`.
  fn schedule_once(&mut self, key: TimerKey, delay: Duration);

  /// Schedules a fixed-delay repeating timer identified by `key`.
  fn schedule_with_fixed_delay(&mut self, key: TimerKey, initial_delay: Duration, interval: Duration);

  /// Cancels the timer identified by `key`, if scheduled.
  fn cancel_timer(&mut self, key: TimerKey);

  /// Takes the element just pushed on the forward inlet.
  fn grab_forward(&mut self) -> A;

  /// Pushes `elem` on the forward outlet.
  fn push_forward(&mut self, elem: A);

  /// Signals demand on the forward inlet.
  fn pull_forward(&mut self);

  /// Completes the forward outlet.
  fn complete_forward(&mut self);

  /// Cancels the forward inlet with `cause`.
  fn cancel_forward(&mut self, cause: StreamError);

  /// Takes the element just pushed on the reverse inlet.
  fn grab_reverse(&mut self) -> B;

  /// Pushes `elem` on the reverse outlet.
  fn push_reverse(&mut self, elem: B);

  /// Signals demand on the reverse inlet.
  fn pull_reverse(&mut self);

  /// Completes the reverse outlet.
  fn complete_reverse(&mut self);

  /// Cancels the reverse inlet with `cause`.
  fn cancel_reverse(&mut self, cause: StreamError);

  /// Fails the whole stage: cancels both inlets, fails both outlets, and
  /// stops, cancelling every outstanding timer.
  fn fail_stage(&mut self, error: StreamError);
}
