use std::time::Duration;

use crate::core::stream_error::StreamError;
use crate::core::time::StreamInstant;
use crate::core::timer::TimerKey;

/// Host-runtime services available to a linear (one-in, one-out) stage.
///
/// Implementations own the monotonic clock, the timer schedules, and the two
/// ports of the stage. Terminal transitions (`complete_stage`, `fail_stage`,
/// `cancel_stage`) are idempotent, happen exactly once, and cancel every
/// outstanding timer so no firing can reach a stopped stage.
pub trait StageContext<T> {
  /// Returns the current monotonic time.
  fn now(&self) -> StreamInstant;

  /// Schedules a one-shot timer identified by `key`, replacing any previous
  /// schedule under the same key.
  fn schedule_once(&mut self, key: TimerKey, delay: Duration);

  /// Schedules a fixed-delay repeating timer identified by `key`, replacing
  /// any previous schedule under the same key.
  fn schedule_with_fixed_delay(&mut self, key: TimerKey, initial_delay: Duration, interval: Duration);

  /// Cancels the timer identified by `key`, if scheduled.
  fn cancel_timer(&mut self, key: TimerKey);

  /// Takes the element just pushed by upstream.
  ///
  /// Valid at most once per `on_push` delivery; hosts may panic on misuse.
  fn grab(&mut self) -> T;

  /// Pushes `elem` downstream, consuming the outstanding demand.
  fn push(&mut self, elem: T);

  /// Signals demand upstream.
  fn pull(&mut self);

  /// Returns true while downstream demand is outstanding.
  fn is_out_available(&self) -> bool;

  /// Returns true once upstream has finished.
  fn is_in_closed(&self) -> bool;

  /// Completes the stage: completes downstream and stops.
  fn complete_stage(&mut self);

  /// Fails the stage: cancels upstream, fails downstream, and stops.
  fn fail_stage(&mut self, error: StreamError);

  /// Cancels the stage: propagates `cause` upstream and stops without
  /// signalling downstream.
  fn cancel_stage(&mut self, cause: StreamError);
}
