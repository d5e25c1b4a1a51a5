//! Runtime adapters hosting stage logics on Tokio.

/// Tokio task embedding of the stage event loop.
mod tokio_stage_runner;

pub use tokio_stage_runner::{StageEffect, StageEvent, TokioStageRunner};
