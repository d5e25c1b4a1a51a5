//! Stream error definitions.


use std::fmt;
use std::time::Duration;

/// Timer policy that observed a timeout violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeoutPolicy {
  /// First element did not arrive within the timeout of stage start.
  Initial,
  /// Stage did not complete within the timeout of stage start.
  Completion,
  /// No element passed through for the timeout.
  Idle,
  /// Downstream demand went unanswered for the timeout.
  Backpressure,
  /// No activity on either direction of a bidi stage for the timeout.
  IdleBidi,
}

impl fmt::Display for TimeoutPolicy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let label = match self {
      | Self::Initial => "initial",
      | Self::Completion => "completion",
      | Self::Idle => "idle",
      | Self::Backpressure => "backpressure",
      | Self::IdleBidi => "idle-bidi",
    };
    f.write_str(label)
  }
}

/// Errors produced by flow-control primitives.
///
/// Timeout violations are terminal for the stage that raises them; retrying a
/// violated temporal guarantee belongs to a supervising layer, not here.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum StreamError {
  /// A constructor argument was outside its documented range.
  #[error("{0} must be positive")]
  InvalidArgument(&'static str),
  /// A temporal guarantee enforced by a timer policy was violated.
  #[error("{policy} timeout exceeded after {timeout:?}")]
  TimeoutExceeded {
    /// Policy that observed the violation.
    policy:  TimeoutPolicy,
    /// Configured timeout duration.
    timeout: Duration,
  },
  /// The stage was cancelled by its downstream.
  #[error("stage cancelled by downstream")]
  Cancelled,
}
