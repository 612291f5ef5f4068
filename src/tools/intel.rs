//! Competitive scans, AI-visibility checks and analytics.

use super::builder::{GatewayTool, ToolBuilder};
use super::format::pretty_response;
use super::schema;
use crate::gateway::RequestOptions;
use serde::Deserialize;
use serde_json::{Map, Value};

pub const DEFAULT_ANALYTICS_DAYS: i64 = 30;

#[derive(Debug, Deserialize)]
struct OrgArgs {
    org_id: i64,
}

#[derive(Debug, Deserialize)]
struct CompetitiveScanArgs {
    org_id: i64,
    #[serde(default)]
    competitors: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct VisibilityScanArgs {
    org_id: i64,
    #[serde(default)]
    questions: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct AnalyticsArgs {
    org_id: i64,
    #[serde(default = "default_days")]
    days: i64,
}

fn default_days() -> i64 {
    DEFAULT_ANALYTICS_DAYS
}

pub fn tools() -> Vec<GatewayTool> {
    vec![
        competitive_scan(),
        competitive_results(),
        ai_visibility_scan(),
        ai_visibility_results(),
        ai_visibility_questions(),
        analytics(),
    ]
}

/// `{key: values}` when any values were given, `{}` otherwise.
fn optional_list_body(key: &str, values: Vec<String>) -> Value {
    let mut body = Map::new();
    if !values.is_empty() {
        body.insert(
            key.to_string(),
            Value::Array(values.into_iter().map(Value::String).collect()),
        );
    }
    Value::Object(body)
}

fn org_get(name: &'static str, description: &'static str, path: &'static str) -> GatewayTool {
    ToolBuilder::new(name)
        .description(description)
        .input_schema(schema::org_only())
        .build(move |gateway, args: OrgArgs| async move {
            let response = gateway
                .get(path, RequestOptions::new().org(args.org_id))
                .await?;
            Ok(pretty_response(&response))
        })
}

fn competitive_scan() -> GatewayTool {
    ToolBuilder::new("pressroom_competitive_scan")
        .description(
            "Scan competitors' sites and content. Without a list, scans the competitors on the org profile.",
        )
        .input_schema(schema::object(
            &[
                ("org_id", schema::org_id()),
                (
                    "competitors",
                    schema::string_list("Competitor domains to scan."),
                ),
            ],
            &["org_id"],
        ))
        .build(|gateway, args: CompetitiveScanArgs| async move {
            let options = RequestOptions::new()
                .org(args.org_id)
                .body(optional_list_body("competitors", args.competitors));
            let response = gateway.post("/api/competitive/scan", options).await?;
            Ok(pretty_response(&response))
        })
}

fn competitive_results() -> GatewayTool {
    org_get(
        "pressroom_competitive_results",
        "Get the latest competitive scan results for an org.",
        "/api/competitive/results",
    )
}

fn ai_visibility_scan() -> GatewayTool {
    ToolBuilder::new("pressroom_ai_visibility_scan")
        .description(
            "Ask AI assistants the org's tracked questions and record whether the brand is cited.",
        )
        .input_schema(schema::object(
            &[
                ("org_id", schema::org_id()),
                (
                    "questions",
                    schema::string_list("Questions to ask. Defaults to the org's tracked set."),
                ),
            ],
            &["org_id"],
        ))
        .build(|gateway, args: VisibilityScanArgs| async move {
            let options = RequestOptions::new()
                .org(args.org_id)
                .body(optional_list_body("questions", args.questions));
            let response = gateway.post("/api/ai-visibility/scan", options).await?;
            Ok(pretty_response(&response))
        })
}

fn ai_visibility_results() -> GatewayTool {
    org_get(
        "pressroom_ai_visibility_results",
        "Get AI-visibility scan results: which assistants cite the brand and for what.",
        "/api/ai-visibility/results",
    )
}

fn ai_visibility_questions() -> GatewayTool {
    org_get(
        "pressroom_ai_visibility_questions",
        "List the questions tracked for AI visibility.",
        "/api/ai-visibility/questions",
    )
}

fn analytics() -> GatewayTool {
    ToolBuilder::new("pressroom_analytics")
        .description("Content and signal analytics for an org over a trailing window.")
        .input_schema(schema::object(
            &[
                ("org_id", schema::org_id()),
                (
                    "days",
                    schema::integer_default("Window size in days.", DEFAULT_ANALYTICS_DAYS),
                ),
            ],
            &["org_id"],
        ))
        .build(|gateway, args: AnalyticsArgs| async move {
            let options = RequestOptions::new()
                .org(args.org_id)
                .query("days", args.days);
            let response = gateway.get("/api/analytics", options).await?;
            Ok(pretty_response(&response))
        })
}
