//! Scout, generate, approve, publish and the combined pipeline.

use super::builder::{GatewayTool, ToolBuilder};
use super::format::render;
use super::schema;
use crate::gateway::RequestOptions;
use crate::pipeline::{self, GENERATE_PATH, SCOUT_PATH, content_action, generate_body, render_batch};
use crate::utils::json;
use serde::Deserialize;
use serde_json::Value;

pub const DEFAULT_SINCE_HOURS: i64 = 24;

#[derive(Debug, Deserialize)]
struct ScoutArgs {
    org_id: i64,
    #[serde(default = "default_since_hours")]
    since_hours: i64,
}

fn default_since_hours() -> i64 {
    DEFAULT_SINCE_HOURS
}

#[derive(Debug, Deserialize)]
struct ChannelArgs {
    org_id: i64,
    #[serde(default)]
    channels: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct BatchArgs {
    org_id: i64,
    content_ids: Vec<i64>,
}

#[derive(Debug, Deserialize)]
struct OrgArgs {
    org_id: i64,
}

pub fn tools() -> Vec<GatewayTool> {
    vec![scout(), generate(), approve(), publish(), full_pipeline()]
}

fn channels_property() -> Value {
    schema::string_list(
        "Optional list of channels (e.g. [\"linkedin\", \"blog\", \"x_thread\"]). If empty, uses org defaults.",
    )
}

fn scout() -> GatewayTool {
    ToolBuilder::new("pressroom_scout")
        .description(
            "Run the scout pipeline: pull signals from GitHub, HN, Reddit, RSS and other configured sources.",
        )
        .input_schema(schema::object(
            &[
                ("org_id", schema::org_id()),
                (
                    "since_hours",
                    schema::integer_default(
                        "How far back to look for signals, in hours.",
                        DEFAULT_SINCE_HOURS,
                    ),
                ),
            ],
            &["org_id"],
        ))
        .build(|gateway, args: ScoutArgs| async move {
            let options = RequestOptions::new()
                .org(args.org_id)
                .query("since_hours", args.since_hours);
            let response = gateway.post(SCOUT_PATH, options).await?;
            Ok(render(&response, format_scout))
        })
}

fn generate() -> GatewayTool {
    ToolBuilder::new("pressroom_generate")
        .description(
            "Generate content from current signals. Runs the brief, content and humanizer pipeline.",
        )
        .input_schema(schema::object(
            &[("org_id", schema::org_id()), ("channels", channels_property())],
            &["org_id"],
        ))
        .build(|gateway, args: ChannelArgs| async move {
            let channels = args.channels.unwrap_or_default();
            let options = RequestOptions::new()
                .org(args.org_id)
                .body(generate_body(&channels));
            let response = gateway.post(GENERATE_PATH, options).await?;
            Ok(render(&response, format_generate))
        })
}

fn approve() -> GatewayTool {
    ToolBuilder::new("pressroom_approve")
        .description("Approve content items, moving them from queued to approved status.")
        .input_schema(schema::object(
            &[
                ("org_id", schema::org_id()),
                (
                    "content_ids",
                    schema::integer_list("List of content IDs to approve."),
                ),
            ],
            &["org_id", "content_ids"],
        ))
        .build(|gateway, args: BatchArgs| async move {
            let entries = content_action(&gateway, args.org_id, &args.content_ids, "approve").await;
            Ok(render_batch("Approved", "approved", &entries))
        })
}

fn publish() -> GatewayTool {
    ToolBuilder::new("pressroom_publish")
        .description("Publish all approved content to their destinations (LinkedIn, X, blog, etc).")
        .input_schema(schema::org_only())
        .build(|gateway, args: OrgArgs| async move {
            let response = gateway
                .post("/api/publish", RequestOptions::new().org(args.org_id))
                .await?;
            Ok(render(&response, format_publish))
        })
}

fn full_pipeline() -> GatewayTool {
    ToolBuilder::new("pressroom_full_pipeline")
        .description(
            "Run the full pipeline: scout, then generate. Does NOT auto-approve; returns content for review.",
        )
        .input_schema(schema::object(
            &[
                ("org_id", schema::org_id()),
                (
                    "channels",
                    schema::string_list("Optional list of channels to generate for."),
                ),
            ],
            &["org_id"],
        ))
        .build_pipeline(|gateway, args: ChannelArgs| async move {
            pipeline::full_pipeline(&gateway, args.org_id, args.channels.unwrap_or_default()).await
        })
}

pub fn format_scout(data: &Value) -> String {
    let signals = json::items(data, "signals")
        .iter()
        .map(|signal| {
            format!(
                "  [{}] {}: {}",
                json::text(signal, "type", "?"),
                json::text(signal, "source", ""),
                json::text(signal, "title", "")
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Scout complete. Raw: {}, Relevant: {}, Saved: {}, Dupes skipped: {}.\n\nSignals:\n{signals}",
        json::text(data, "signals_raw", "0"),
        json::text(data, "signals_relevant", "0"),
        json::text(data, "signals_saved", "0"),
        json::text(data, "signals_skipped_dupes", "0"),
    )
}

pub fn format_generate(data: &Value) -> String {
    let items = json::items(data, "items");
    let rows = items
        .iter()
        .map(|item| {
            format!(
                "  [{}] {}",
                json::text(item, "channel", "?"),
                json::text(item, "headline", "")
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("Generated {} content items.\n\n{rows}", items.len())
}

pub fn format_publish(data: &Value) -> String {
    let rows = json::items(data, "results")
        .iter()
        .map(|result| {
            let status = match result.get("error") {
                Some(_) => format!("FAILED: {}", json::text(result, "error", "")),
                None => "sent".to_string(),
            };
            format!("  [{}] {status}", json::text(result, "channel", "?"))
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Published: {}, Errors: {}\n\n{rows}",
        json::text(data, "published", "0"),
        json::text(data, "errors", "0"),
    )
}
