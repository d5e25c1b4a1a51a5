//! Stage logic and stage context seams between policies and the host runtime.
//!
//! The host delivers exactly one event (push, pull, upstream finish,
//! downstream cancel, timer firing) at a time to a stage instance; logics and
//! contexts therefore carry no locking and must never be shared across
//! threads.

/// Bidirectional stage context seam.
mod bidi_stage_context;
/// Bidirectional stage logic trait.
mod bidi_stage_logic;
/// Linear stage context seam.
mod stage_context;
/// Linear stage logic trait.
mod stage_logic;

pub use bidi_stage_context::BidiStageContext;
pub use bidi_stage_logic::BidiStageLogic;
pub use stage_context::StageContext;
pub use stage_logic::StageLogic;
