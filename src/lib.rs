//! Flow-control core for demand-driven stream stages.
//!
//! Two subsystems cover what every asynchronous stage boundary needs: the
//! boundary buffers ([`core::Buffer`] and its strategies) that decouple the
//! rates of two stages without ever exceeding a configured capacity, and the
//! timer-supervised stage behaviors ([`core::InitialTimeout`],
//! [`core::IdleTimeout`], [`core::IdleInject`], and friends) that enforce
//! temporal guarantees on top of the push/pull protocol.
//!
//! The host runtime is an external collaborator reached through the
//! [`core::StageContext`] seam: it delivers exactly one event at a time to a
//! stage instance, owns the monotonic clock, and executes timer schedules.
//! [`core::StageHarness`] is a deterministic embedding of that contract for
//! tests; [`rt::TokioStageRunner`] hosts a stage logic on a Tokio task.

/// Core flow-control primitives independent of any host runtime.
pub mod core;
/// Runtime adapters hosting stage logics on Tokio.
pub mod rt;
