//! Timer identities and per-stage timer bookkeeping.


use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use hashbrown::HashMap;

use crate::core::time::StreamInstant;

/// Key identifying one timer owned by a stage instance.
///
/// Keys are scoped to their stage: two stages may use the same key without
/// interfering, because every host keeps one table per stage instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerKey(u64);

impl TimerKey {
  /// Creates a key from its raw representation.
  #[must_use]
  pub const fn from_raw(raw: u64) -> Self {
    Self(raw)
  }

  /// Returns the raw representation.
  #[must_use]
  pub const fn into_raw(self) -> u64 {
    self.0
  }
}

/// Allocates process-unique timer keys for hosts that manage many stages.
#[derive(Debug)]
pub struct TimerKeyAllocator {
  next: AtomicU64,
}

impl TimerKeyAllocator {
  /// Creates a new allocator.
  #[must_use]
  pub const fn new() -> Self {
    Self { next: AtomicU64::new(1) }
  }

  /// Returns the next unused key.
  pub fn allocate(&self) -> TimerKey {
    TimerKey(self.next.fetch_add(1, Ordering::Relaxed))
  }
}

impl Default for TimerKeyAllocator {
  fn default() -> Self {
    Self::new()
  }
}

#[derive(Debug)]
struct TimerEntry {
  fire_at:  StreamInstant,
  interval: Option<Duration>,
  seq:      u64,
}

/// Per-stage table of scheduled timers keyed by [`TimerKey`].
///
/// Scheduling an already-present key replaces its entry. [`TimerTable::clear`]
/// models the scoped cancellation every host performs when a stage reaches a
/// terminal state, so a late firing can never reach a torn-down stage.
#[derive(Debug, Default)]
pub struct TimerTable {
  entries: HashMap<TimerKey, TimerEntry>,
  seq:     u64,
}

impl TimerTable {
  /// Creates an empty table.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Schedules a one-shot firing at `now + delay`.
  pub fn schedule_once(&mut self, key: TimerKey, now: StreamInstant, delay: Duration) {
    self.insert(key, now.saturating_add(delay), None);
  }

  /// Schedules a fixed-delay repeating firing, first due at
  /// `now + initial_delay` and then every `interval` after each firing.
  ///
  /// A zero interval degenerates to a one-shot; a timer due again the instant
  /// it fired would starve its stage of every other event.
  pub fn schedule_with_fixed_delay(
    &mut self,
    key: TimerKey,
    now: StreamInstant,
    initial_delay: Duration,
    interval: Duration,
  ) {
    let interval = if interval.is_zero() { None } else { Some(interval) };
    self.insert(key, now.saturating_add(initial_delay), interval);
  }

  /// Cancels the timer identified by `key`, if scheduled.
  pub fn cancel(&mut self, key: TimerKey) {
    self.entries.remove(&key);
  }

  /// Cancels every scheduled timer.
  pub fn clear(&mut self) {
    self.entries.clear();
  }

  /// Returns the earliest scheduled firing instant.
  #[must_use]
  pub fn next_deadline(&self) -> Option<StreamInstant> {
    self.entries.values().map(|entry| entry.fire_at).min()
  }

  /// Takes the earliest firing due at or before `horizon`.
  ///
  /// Ties on the firing instant are broken by scheduling order. One-shot
  /// entries retire; fixed-delay entries move to their next period before the
  /// key is handed out, so the receiver may freely reschedule it.
  pub fn pop_due(&mut self, horizon: StreamInstant) -> Option<(TimerKey, StreamInstant)> {
    let (key, fire_at) = self
      .entries
      .iter()
      .filter(|(_, entry)| horizon.has_reached(entry.fire_at))
      .min_by_key(|(_, entry)| (entry.fire_at, entry.seq))
      .map(|(key, entry)| (*key, entry.fire_at))?;
    match self.entries.get_mut(&key).and_then(|entry| entry.interval) {
      | Some(interval) => {
        if let Some(entry) = self.entries.get_mut(&key) {
          entry.fire_at = fire_at.saturating_add(interval);
        }
      },
      | None => {
        self.entries.remove(&key);
      },
    }
    Some((key, fire_at))
  }

  /// Returns the number of scheduled timers.
  #[must_use]
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Returns true when no timer is scheduled.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  fn insert(&mut self, key: TimerKey, fire_at: StreamInstant, interval: Option<Duration>) {
    let seq = self.seq;
    self.seq += 1;
    self.entries.insert(key, TimerEntry { fire_at, interval, seq });
  }
}
