//! Timer-supervised stage behaviors enforcing temporal guarantees.
//!
//! Each policy wraps a pass-through stage and reacts to scheduled timers.
//! The failing policies (initial, completion, idle, backpressure, idle-bidi)
//! raise a terminal [`StreamError::TimeoutExceeded`]; the non-failing ones
//! (delayed start, idle injection) only gate demand or substitute filler
//! elements.
//!
//! [`StreamError::TimeoutExceeded`]: crate::core::StreamError::TimeoutExceeded

#[cfg(test)]
mod tests;

/// Fails when downstream demand goes unanswered for the timeout.
mod backpressure_timeout;
/// Fails when the stage does not complete within the timeout.
mod completion_timeout;
/// Holds back the first demand signal for a fixed delay.
mod delay_initial;
/// Emits filler elements while the stream sits idle.
mod idle_inject;
/// Fails when no element passes through for the timeout.
mod idle_timeout;
/// Fails when neither direction of a bidi stage sees traffic.
mod idle_timeout_bidi;
/// Fails when the first element does not arrive within the timeout.
mod initial_timeout;

pub use backpressure_timeout::BackpressureTimeout;
pub use completion_timeout::CompletionTimeout;
pub use delay_initial::DelayInitial;
pub use idle_inject::IdleInject;
pub use idle_timeout::IdleTimeout;
pub use idle_timeout_bidi::IdleTimeoutBidi;
pub use initial_timeout::InitialTimeout;

use std::time::Duration;

/// Smallest repeating-timer period used for deadline checks.
const MIN_CHECK_INTERVAL: Duration = Duration::from_millis(100);
/// Largest repeating-timer period used for deadline checks.
const MAX_CHECK_INTERVAL: Duration = Duration::from_secs(1);

/// Derives the repeating-timer period used to supervise `timeout`.
///
/// Long timeouts are polled at a coarse one-second period to bound wasted
/// wake-ups; short timeouts get finer resolution, bounded below by 100ms and
/// never exceeding half the timeout, so a violation is detected within one
/// period of the true deadline.
#[must_use]
pub fn timeout_check_interval(timeout: Duration) -> Duration {
  let preferred = (timeout / 8).clamp(MIN_CHECK_INTERVAL, MAX_CHECK_INTERVAL);
  preferred.min(timeout / 2)
}
