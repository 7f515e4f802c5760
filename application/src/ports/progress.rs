//! Progress notification port
//!
//! Implementations live in the presentation layer (console bars, plain
//! text, or nothing at all).

use council_domain::{Model, Stage};

/// Callbacks fired as a council turn advances
pub trait CouncilProgress: Send + Sync {
    /// A stage is starting; `total` is the number of model calls it will make
    fn on_stage_start(&self, stage: &Stage, total: usize);

    /// One model call within the stage finished
    fn on_model_complete(&self, stage: &Stage, model: &Model, success: bool);

    /// The stage finished
    fn on_stage_complete(&self, stage: &Stage);
}

/// No-op progress notifier
pub struct NoProgress;

impl CouncilProgress for NoProgress {
    fn on_stage_start(&self, _stage: &Stage, _total: usize) {}
    fn on_model_complete(&self, _stage: &Stage, _model: &Model, _success: bool) {}
    fn on_stage_complete(&self, _stage: &Stage) {}
}
