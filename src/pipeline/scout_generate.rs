//! `full_pipeline`: scout for signals, then generate content from them.
//!
//! The run stops before approval. Approve and publish are separate tools.

use super::runner::{Pipeline, PipelineRun, PipelineStep, StepFuture, StepOutcome};
use crate::error::PipelineError;
use crate::gateway::{ApiResponse, GatewayClient, RequestOptions};
use crate::utils::json;
use serde_json::{Value, json};

pub const SCOUT_PATH: &str = "/api/pipeline/scout";
pub const GENERATE_PATH: &str = "/api/pipeline/generate";

/// A content item handed back by the generate step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedItem {
    pub id: String,
    pub channel: String,
    pub headline: String,
}

impl GeneratedItem {
    fn from_value(value: &Value) -> Self {
        Self {
            id: json::text(value, "id", "?"),
            channel: json::text(value, "channel", "?"),
            headline: json::text(value, "headline", ""),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoutGenerateState {
    pub org_id: i64,
    pub channels: Vec<String>,
    /// `signals_saved` as reported by scout; `None` until scout succeeded.
    pub signals_saved: Option<String>,
    /// `None` until generate succeeded.
    pub items: Option<Vec<GeneratedItem>>,
}

impl ScoutGenerateState {
    pub fn new(org_id: i64, channels: Vec<String>) -> Self {
        Self {
            org_id,
            channels,
            ..Self::default()
        }
    }

    fn scout_summary(&self) -> String {
        format!(
            "Scout: {} new signals",
            self.signals_saved.as_deref().unwrap_or("0")
        )
    }
}

/// Body for the generate endpoint: `channels` only when any were given.
pub fn generate_body(channels: &[String]) -> Value {
    if channels.is_empty() {
        json!({})
    } else {
        json!({ "channels": channels })
    }
}

struct ScoutStep;

impl PipelineStep<ScoutGenerateState> for ScoutStep {
    fn name(&self) -> &'static str {
        "scout"
    }

    fn run<'a>(
        &'a self,
        gateway: &'a GatewayClient,
        state: &'a mut ScoutGenerateState,
    ) -> StepFuture<'a> {
        Box::pin(async move {
            let options = RequestOptions::new().org(state.org_id);
            match gateway.post(SCOUT_PATH, options).await? {
                ApiResponse::Success(data) => {
                    state.signals_saved = Some(json::text(&data, "signals_saved", "0"));
                    Ok(StepOutcome::Continue)
                }
                ApiResponse::Failure(failure) => Ok(StepOutcome::Halt(failure)),
            }
        })
    }
}

struct GenerateStep;

impl PipelineStep<ScoutGenerateState> for GenerateStep {
    fn name(&self) -> &'static str {
        "generate"
    }

    fn run<'a>(
        &'a self,
        gateway: &'a GatewayClient,
        state: &'a mut ScoutGenerateState,
    ) -> StepFuture<'a> {
        Box::pin(async move {
            let options = RequestOptions::new()
                .org(state.org_id)
                .body(generate_body(&state.channels));
            match gateway.post(GENERATE_PATH, options).await? {
                ApiResponse::Success(data) => {
                    let items = json::items(&data, "items")
                        .iter()
                        .map(GeneratedItem::from_value)
                        .collect();
                    state.items = Some(items);
                    Ok(StepOutcome::Continue)
                }
                ApiResponse::Failure(failure) => Ok(StepOutcome::Halt(failure)),
            }
        })
    }
}

pub fn scout_generate_pipeline() -> Pipeline<ScoutGenerateState> {
    Pipeline::new("full_pipeline")
        .step(ScoutStep)
        .step(GenerateStep)
}

/// Run scout then generate for `org_id` and render the combined report.
pub async fn full_pipeline(
    gateway: &GatewayClient,
    org_id: i64,
    channels: Vec<String>,
) -> Result<String, PipelineError> {
    let run = scout_generate_pipeline()
        .run(gateway, ScoutGenerateState::new(org_id, channels))
        .await
        .map_err(|fault| fault.into_error(progress))?;
    Ok(render_report(&run))
}

/// Summary of the steps that completed before a fault.
fn progress(state: &ScoutGenerateState) -> Option<String> {
    state.signals_saved.as_ref().map(|_| state.scout_summary())
}

pub fn render_report(run: &PipelineRun<ScoutGenerateState>) -> String {
    match run {
        PipelineRun::Halted {
            step: "scout",
            failure,
            ..
        } => format!("Scout failed: {}", failure.message),
        PipelineRun::Halted { failure, state, .. } => {
            format!("{}\nGenerate failed: {}", state.scout_summary(), failure.message)
        }
        PipelineRun::Completed(state) => {
            let items = state.items.as_deref().unwrap_or_default();
            let listing = items
                .iter()
                .map(|item| format!("  [{}] #{} — {}", item.channel, item.id, item.headline))
                .collect::<Vec<_>>()
                .join("\n");
            format!(
                "Pipeline complete.\n{}\nGenerate: {} content items\n\n\
                 Content awaiting approval:\n{listing}\n\n\
                 Use pressroom_approve() to approve items, then pressroom_publish() to send them.",
                state.scout_summary(),
                items.len(),
            )
        }
    }
}
