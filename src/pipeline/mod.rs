//! Multi-step workflows over the gateway.
//!
//! [`Pipeline`] runs dependent steps and stops at the first backend failure,
//! keeping whatever earlier steps produced. [`batch`] is the separate
//! every-id-is-attempted policy used by bulk content actions.

pub mod batch;
mod onboard;
mod runner;
mod scout_generate;

pub use batch::{BatchCall, BatchEntry, BatchOutcome, content_action, render_batch, run_batch};
pub use onboard::{
    CRAWL_PATH, OnboardState, PROFILE_PATH, onboard, onboard_pipeline, profile_body,
};
pub use runner::{Pipeline, PipelineFault, PipelineRun, PipelineStep, StepFuture, StepOutcome};
pub use scout_generate::{
    GENERATE_PATH, GeneratedItem, SCOUT_PATH, ScoutGenerateState, full_pipeline, generate_body,
    scout_generate_pipeline,
};
