use crate::error::{GatewayError, PipelineError};
use crate::gateway::{ApiFailure, GatewayClient};
use std::future::Future;
use std::pin::Pin;
use tracing::{debug, warn};

pub type StepFuture<'a> =
    Pin<Box<dyn Future<Output = Result<StepOutcome, GatewayError>> + Send + 'a>>;

/// What a step tells the runner after its call resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    Continue,
    Halt(ApiFailure),
}

/// One stage of a linear workflow over accumulated state `S`.
///
/// A step reads what earlier steps left in the state, makes its backend
/// call(s) and records its own output before returning.
pub trait PipelineStep<S>: Send + Sync {
    fn name(&self) -> &'static str;

    fn run<'a>(&'a self, gateway: &'a GatewayClient, state: &'a mut S) -> StepFuture<'a>;
}

/// Result of a pipeline run. The state always carries every completed
/// step's output so partial progress can be reported.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineRun<S> {
    Completed(S),
    Halted {
        step: &'static str,
        failure: ApiFailure,
        state: S,
    },
}

impl<S> PipelineRun<S> {
    pub fn state(&self) -> &S {
        match self {
            Self::Completed(state) | Self::Halted { state, .. } => state,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}

/// A transport fault that ended a run. `state` holds the output of every
/// step before `step`.
#[derive(Debug)]
pub struct PipelineFault<S> {
    pub step: &'static str,
    pub state: S,
    pub source: GatewayError,
}

impl<S> PipelineFault<S> {
    /// Keep the fault, replacing the state with a summary of completed steps.
    pub fn into_error(self, progress: impl FnOnce(&S) -> Option<String>) -> PipelineError {
        PipelineError {
            progress: progress(&self.state),
            source: self.source,
        }
    }
}

/// Ordered steps with stop-on-first-failure semantics.
pub struct Pipeline<S> {
    name: &'static str,
    steps: Vec<Box<dyn PipelineStep<S>>>,
}

impl<S: Send> Pipeline<S> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            steps: Vec::new(),
        }
    }

    #[must_use]
    pub fn step(mut self, step: impl PipelineStep<S> + 'static) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|step| step.name()).collect()
    }

    /// Run every step in order. A halted step ends the run; later steps
    /// are never started. A transport fault aborts with `Err`, still
    /// carrying the state built so far.
    pub async fn run(
        &self,
        gateway: &GatewayClient,
        mut state: S,
    ) -> Result<PipelineRun<S>, PipelineFault<S>> {
        for step in &self.steps {
            debug!(pipeline = self.name, step = step.name(), "running pipeline step");
            let result = step.run(gateway, &mut state).await;
            let outcome = match result {
                Ok(outcome) => outcome,
                Err(source) => {
                    warn!(
                        pipeline = self.name,
                        step = step.name(),
                        error = %source,
                        "pipeline step did not reach the backend"
                    );
                    return Err(PipelineFault {
                        step: step.name(),
                        state,
                        source,
                    });
                }
            };
            match outcome {
                StepOutcome::Continue => {}
                StepOutcome::Halt(failure) => {
                    warn!(
                        pipeline = self.name,
                        step = step.name(),
                        error = %failure.message,
                        "pipeline halted"
                    );
                    return Ok(PipelineRun::Halted {
                        step: step.name(),
                        failure,
                        state,
                    });
                }
            }
        }
        Ok(PipelineRun::Completed(state))
    }
}
