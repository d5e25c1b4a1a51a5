//! Core flow-control primitives: boundary buffers, stage seams, timer
//! policies, and the deterministic test harnesses.

/// Boundary buffer strategies and the selection factory.
mod buffer;
/// Stage logic and stage context seams to the host runtime.
mod stage;
/// Stream error definitions.
mod stream_error;
/// Deterministic single-stage test harnesses.
mod testkit;
/// Monotonic time representation.
mod time;
/// Timer-supervised stage behaviors.
mod timeout;
/// Timer identities and per-stage timer bookkeeping.
mod timer;

pub use buffer::{Buffer, GrowableBuffer, ModuloRingBuffer, Pow2RingBuffer, DEFAULT_MAX_FIXED_BUFFER_SIZE, FIXED_QUEUE_SIZE};
pub use stage::{BidiStageContext, BidiStageLogic, StageContext, StageLogic};
pub use stream_error::{StreamError, TimeoutPolicy};
pub use testkit::{BidiStageHarness, StageHarness};
pub use time::StreamInstant;
pub use timeout::{
  timeout_check_interval, BackpressureTimeout, CompletionTimeout, DelayInitial, IdleInject, IdleTimeout,
  IdleTimeoutBidi, InitialTimeout,
};
pub use timer::{TimerKey, TimerKeyAllocator, TimerTable};

pub(crate) use time::saturating_nanos;
