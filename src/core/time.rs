//! Monotonic time representation shared by clocks, deadlines, and timers.


use std::time::Duration;

/// Nanosecond-resolution monotonic timestamp supplied by a host clock.
///
/// Instants are opaque offsets from the host clock origin; they only support
/// the operations deadline bookkeeping needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct StreamInstant(u64);

impl StreamInstant {
  /// Origin of the monotonic scale.
  pub const ZERO: Self = Self(0);

  /// Creates an instant from nanoseconds since the clock origin.
  #[must_use]
  pub const fn from_nanos(nanos: u64) -> Self {
    Self(nanos)
  }

  /// Returns nanoseconds since the clock origin.
  #[must_use]
  pub const fn as_nanos(self) -> u64 {
    self.0
  }

  /// Returns the instant advanced by `duration`, saturating at the scale end.
  #[must_use]
  pub const fn saturating_add(self, duration: Duration) -> Self {
    Self(self.0.saturating_add(saturating_nanos(duration)))
  }

  /// Returns the time remaining until `deadline`, or zero once it has passed.
  #[must_use]
  pub const fn remaining_until(self, deadline: Self) -> Duration {
    Duration::from_nanos(deadline.0.saturating_sub(self.0))
  }

  /// Returns true when `deadline` is at or before this instant.
  #[must_use]
  pub const fn has_reached(self, deadline: Self) -> bool {
    self.0 >= deadline.0
  }
}

/// Narrows a duration to `u64` nanoseconds, saturating at the scale end.
pub(crate) const fn saturating_nanos(duration: Duration) -> u64 {
  let nanos = duration.as_nanos();
  if nanos > u64::MAX as u128 {
    u64::MAX
  } else {
    nanos as u64
  }
}
