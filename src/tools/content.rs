use super::builder::{GatewayTool, ToolBuilder};
use super::format::{pretty_response, render, render_list};
use super::schema;
use crate::gateway::RequestOptions;
use crate::pipeline::{content_action, render_batch};
use crate::utils::{json, text};
use serde::Deserialize;
use serde_json::{Map, Value};

pub const DEFAULT_STATUS: &str = "queued";
pub const DEFAULT_LIMIT: i64 = 50;
const BODY_PREVIEW_CHARS: usize = 200;

#[derive(Debug, Deserialize)]
struct ListArgs {
    org_id: i64,
    #[serde(default = "default_status")]
    status: String,
    #[serde(default = "default_limit")]
    limit: i64,
}

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

#[derive(Debug, Deserialize)]
struct ContentArgs {
    content_id: i64,
    #[serde(default)]
    org_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct BatchArgs {
    org_id: i64,
    content_ids: Vec<i64>,
}

#[derive(Debug, Deserialize)]
struct EditArgs {
    org_id: i64,
    content_id: i64,
    #[serde(default)]
    headline: Option<String>,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    channel: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ScheduleArgs {
    org_id: i64,
    content_id: i64,
    scheduled_at: String,
}

pub fn tools() -> Vec<GatewayTool> {
    vec![
        list_content(),
        get_content(),
        spike_content(),
        edit_content(),
        humanize_content(),
        schedule_content(),
    ]
}

fn content_target() -> Vec<(&'static str, Value)> {
    vec![
        ("org_id", schema::org_id()),
        ("content_id", schema::integer("The content item ID.")),
    ]
}

fn list_content() -> GatewayTool {
    ToolBuilder::new("pressroom_list_content")
        .description("List content items for an org, optionally filtered by status.")
        .input_schema(schema::object(
            &[
                ("org_id", schema::org_id()),
                (
                    "status",
                    schema::string_default(
                        "Filter by status: queued, approved, published, spiked; empty for all.",
                        DEFAULT_STATUS,
                    ),
                ),
                (
                    "limit",
                    schema::integer_default("Max number of items to return.", DEFAULT_LIMIT),
                ),
            ],
            &["org_id"],
        ))
        .build(|gateway, args: ListArgs| async move {
            let options = RequestOptions::new()
                .org(args.org_id)
                .query("limit", args.limit)
                .query_non_empty("status", &args.status);
            let response = gateway.get("/api/content", options).await?;
            Ok(render(&response, |data| format_content_list(data, &args.status)))
        })
}

fn get_content() -> GatewayTool {
    ToolBuilder::new("pressroom_get_content")
        .description("Get the full content item including body text.")
        .input_schema(schema::object(
            &[
                ("content_id", schema::integer("The content item ID.")),
                ("org_id", schema::org_id()),
            ],
            &["content_id"],
        ))
        .build(|gateway, args: ContentArgs| async move {
            let options = RequestOptions::new().unscoped().maybe_org(args.org_id);
            let response = gateway
                .get(&format!("/api/content/{}", args.content_id), options)
                .await?;
            Ok(pretty_response(&response))
        })
}

fn spike_content() -> GatewayTool {
    ToolBuilder::new("pressroom_spike_content")
        .description("Spike (kill) content items so they are never published.")
        .input_schema(schema::object(
            &[
                ("org_id", schema::org_id()),
                (
                    "content_ids",
                    schema::integer_list("List of content IDs to spike."),
                ),
            ],
            &["org_id", "content_ids"],
        ))
        .build(|gateway, args: BatchArgs| async move {
            let entries = content_action(&gateway, args.org_id, &args.content_ids, "spike").await;
            Ok(render_batch("Spiked", "spiked", &entries))
        })
}

fn edit_content() -> GatewayTool {
    let mut properties = content_target();
    properties.extend([
        ("headline", schema::string("New headline.")),
        ("body", schema::string("New body text.")),
        ("channel", schema::string("Move the item to another channel.")),
    ]);
    ToolBuilder::new("pressroom_edit_content")
        .description("Edit a content item's headline, body or channel.")
        .input_schema(schema::object(&properties, &["org_id", "content_id"]))
        .build(|gateway, args: EditArgs| async move {
            let mut body = Map::new();
            for (key, value) in [
                ("headline", args.headline),
                ("body", args.body),
                ("channel", args.channel),
            ] {
                if let Some(value) = value {
                    body.insert(key.to_string(), Value::String(value));
                }
            }
            if body.is_empty() {
                return Ok("Error: nothing to update; pass headline, body or channel.".to_string());
            }
            let options = RequestOptions::new()
                .org(args.org_id)
                .body(Value::Object(body));
            let response = gateway
                .put(&format!("/api/content/{}", args.content_id), options)
                .await?;
            Ok(pretty_response(&response))
        })
}

fn humanize_content() -> GatewayTool {
    ToolBuilder::new("pressroom_humanize_content")
        .description("Run a content item through the humanizer skill to strip AI-sounding phrasing.")
        .input_schema(schema::object(&content_target(), &["org_id", "content_id"]))
        .build(|gateway, args: ContentArgs| async move {
            let options = RequestOptions::new().maybe_org(args.org_id);
            let response = gateway
                .post(&format!("/api/content/{}/humanize", args.content_id), options)
                .await?;
            Ok(pretty_response(&response))
        })
}

fn schedule_content() -> GatewayTool {
    let mut properties = content_target();
    properties.push((
        "scheduled_at",
        schema::string("When to publish, as an ISO 8601 timestamp."),
    ));
    ToolBuilder::new("pressroom_schedule_content")
        .description("Schedule an approved content item for publishing at a specific time.")
        .input_schema(schema::object(
            &properties,
            &["org_id", "content_id", "scheduled_at"],
        ))
        .build(|gateway, args: ScheduleArgs| async move {
            let options = RequestOptions::new()
                .org(args.org_id)
                .body(serde_json::json!({ "scheduled_at": args.scheduled_at }));
            let response = gateway
                .post(&format!("/api/content/{}/schedule", args.content_id), options)
                .await?;
            Ok(pretty_response(&response))
        })
}

pub fn format_content_list(data: &Value, status: &str) -> String {
    render_list(
        data,
        &format!("No content found with status '{status}'."),
        "items",
        |item| {
            let body = item.get("body").and_then(Value::as_str).unwrap_or_default();
            format!(
                "  #{} [{}] {} — {}\n    {}",
                json::text(item, "id", "?"),
                json::text(item, "channel", "?"),
                json::text(item, "status", "?"),
                json::text(item, "headline", ""),
                text::preview(body, BODY_PREVIEW_CHARS),
            )
        },
    )
}
