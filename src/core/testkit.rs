//! Deterministic single-stage test harnesses.
//!
//! The harnesses host one stage logic on a virtual clock, play upstream and
//! downstream for it, and record everything the stage signals. Time only
//! moves through [`StageHarness::advance_time`], which fires due timers in
//! deadline order with the clock pinned to each firing instant, so timer
//! scenarios replay identically on every run.

/// Harness for bidirectional stage logics.
mod bidi_stage_harness;
/// Harness for linear stage logics.
mod stage_harness;

pub use bidi_stage_harness::BidiStageHarness;
pub use stage_harness::StageHarness;
