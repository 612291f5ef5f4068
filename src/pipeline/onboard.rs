//! `onboard`: crawl a domain, then synthesize a company profile from it.
//!
//! The crawl result is passed verbatim to profile synthesis as `crawl_data`.
//! Nothing is persisted here; `pressroom_onboard_apply` does that.

use super::runner::{Pipeline, PipelineRun, PipelineStep, StepFuture, StepOutcome};
use crate::error::PipelineError;
use crate::gateway::{ApiResponse, GatewayClient, RequestOptions};
use crate::utils::json;
use serde_json::{Map, Value, json};

pub const CRAWL_PATH: &str = "/api/onboard/crawl";
pub const PROFILE_PATH: &str = "/api/onboard/profile";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OnboardState {
    pub org_id: i64,
    pub domain: String,
    pub extra_context: Option<String>,
    pub crawl: Option<Value>,
    pub profile: Option<Value>,
}

impl OnboardState {
    pub fn new(org_id: i64, domain: impl Into<String>, extra_context: Option<String>) -> Self {
        Self {
            org_id,
            domain: domain.into(),
            extra_context: extra_context.filter(|context| !context.is_empty()),
            ..Self::default()
        }
    }
}

/// Body for profile synthesis.
pub fn profile_body(crawl_data: &Value, domain: &str, extra_context: Option<&str>) -> Value {
    let mut body = Map::new();
    body.insert("crawl_data".into(), crawl_data.clone());
    body.insert("domain".into(), Value::String(domain.to_string()));
    if let Some(context) = extra_context {
        body.insert("extra_context".into(), Value::String(context.to_string()));
    }
    Value::Object(body)
}

struct CrawlStep;

impl PipelineStep<OnboardState> for CrawlStep {
    fn name(&self) -> &'static str {
        "crawl"
    }

    fn run<'a>(&'a self, gateway: &'a GatewayClient, state: &'a mut OnboardState) -> StepFuture<'a> {
        Box::pin(async move {
            let options = RequestOptions::new()
                .org(state.org_id)
                .body(json!({ "domain": state.domain }));
            match gateway.post(CRAWL_PATH, options).await? {
                ApiResponse::Success(data) => {
                    state.crawl = Some(data);
                    Ok(StepOutcome::Continue)
                }
                ApiResponse::Failure(failure) => Ok(StepOutcome::Halt(failure)),
            }
        })
    }
}

struct ProfileStep;

impl PipelineStep<OnboardState> for ProfileStep {
    fn name(&self) -> &'static str {
        "profile"
    }

    fn run<'a>(&'a self, gateway: &'a GatewayClient, state: &'a mut OnboardState) -> StepFuture<'a> {
        Box::pin(async move {
            let crawl = state.crawl.clone().unwrap_or(Value::Null);
            let body = profile_body(&crawl, &state.domain, state.extra_context.as_deref());
            let options = RequestOptions::new().org(state.org_id).body(body);
            match gateway.post(PROFILE_PATH, options).await? {
                ApiResponse::Success(data) => {
                    state.profile = Some(data);
                    Ok(StepOutcome::Continue)
                }
                ApiResponse::Failure(failure) => Ok(StepOutcome::Halt(failure)),
            }
        })
    }
}

pub fn onboard_pipeline() -> Pipeline<OnboardState> {
    Pipeline::new("onboard").step(CrawlStep).step(ProfileStep)
}

pub async fn onboard(
    gateway: &GatewayClient,
    org_id: i64,
    domain: &str,
    extra_context: Option<String>,
) -> Result<String, PipelineError> {
    let run = onboard_pipeline()
        .run(gateway, OnboardState::new(org_id, domain, extra_context))
        .await
        .map_err(|fault| fault.into_error(progress))?;
    Ok(render_report(&run))
}

fn progress(state: &OnboardState) -> Option<String> {
    state
        .crawl
        .as_ref()
        .map(|_| format!("Crawl complete for {}.", state.domain))
}

pub fn render_report(run: &PipelineRun<OnboardState>) -> String {
    match run {
        PipelineRun::Halted {
            step: "crawl",
            failure,
            ..
        } => format!("Crawl failed: {}", failure.message),
        PipelineRun::Halted { failure, .. } => {
            format!("Profile synthesis failed: {}", failure.message)
        }
        PipelineRun::Completed(state) => match &state.profile {
            Some(data) => render_profile(&state.domain, data),
            None => render_profile(&state.domain, &Value::Null),
        },
    }
}

fn render_profile(domain: &str, data: &Value) -> String {
    // Some backends wrap the profile, some return it flat.
    let profile = match data.get("profile") {
        Some(nested) if nested.is_object() => nested,
        _ => data,
    };

    let company = match profile.get("company_name") {
        Some(value) if !value.is_null() => json::text(profile, "company_name", "?"),
        _ => json::text(profile, "name", "?"),
    };

    format!(
        "Profile synthesized for {domain}.\n\
         Company: {company}\n\
         Industry: {}\n\
         Topics: {}\n\
         Competitors: {}\n\n\
         Full profile:\n{}\n\n\
         Review the profile, then call pressroom_onboard_apply() to save it.",
        json::text(profile, "industry", "?"),
        join_names(json::items(profile, "topics")),
        join_names(json::items(profile, "competitors")),
        json::pretty(profile),
    )
}

/// Comma list of strings, or of objects' `name` fields.
fn join_names(values: &[Value]) -> String {
    if values.is_empty() {
        return "none".to_string();
    }
    values
        .iter()
        .map(|value| match value {
            Value::String(s) => s.clone(),
            Value::Object(_) => json::text(value, "name", &value.to_string()),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
