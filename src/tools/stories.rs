//! Stories: editor-curated bundles of signals that content is generated from.

use super::builder::{GatewayTool, ToolBuilder};
use super::core_pipeline::format_generate;
use super::format::{pretty_response, render, render_list};
use super::schema;
use crate::gateway::RequestOptions;
use crate::pipeline::generate_body;
use crate::utils::json;
use serde::Deserialize;
use serde_json::{Map, Value, json};

#[derive(Debug, Deserialize)]
struct OrgArgs {
    org_id: i64,
}

#[derive(Debug, Deserialize)]
struct StoryArgs {
    org_id: i64,
    story_id: i64,
}

#[derive(Debug, Deserialize)]
struct CreateStoryArgs {
    org_id: i64,
    title: String,
    #[serde(default)]
    angle: Option<String>,
    #[serde(default)]
    signal_ids: Option<Vec<i64>>,
}

#[derive(Debug, Deserialize)]
struct AddSignalArgs {
    org_id: i64,
    story_id: i64,
    signal_id: i64,
    #[serde(default)]
    editor_notes: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StoryGenerateArgs {
    org_id: i64,
    story_id: i64,
    #[serde(default)]
    channels: Option<Vec<String>>,
}

pub fn tools() -> Vec<GatewayTool> {
    vec![
        list_stories(),
        create_story(),
        get_story(),
        add_signal_to_story(),
        generate_from_story(),
        discover_signals(),
    ]
}

fn story_schema(extra: &[(&str, Value)], required: &[&str]) -> Value {
    let mut properties = vec![
        ("org_id", schema::org_id()),
        ("story_id", schema::integer("The story ID.")),
    ];
    properties.extend(extra.iter().cloned());
    let mut all_required = vec!["org_id", "story_id"];
    all_required.extend_from_slice(required);
    schema::object(&properties, &all_required)
}

fn list_stories() -> GatewayTool {
    ToolBuilder::new("pressroom_list_stories")
        .description("List stories for an org.")
        .input_schema(schema::org_only())
        .build(|gateway, args: OrgArgs| async move {
            let response = gateway
                .get("/api/stories", RequestOptions::new().org(args.org_id))
                .await?;
            Ok(render(&response, format_stories))
        })
}

fn create_story() -> GatewayTool {
    ToolBuilder::new("pressroom_create_story")
        .description("Create a story, optionally seeded with an angle and a set of signals.")
        .input_schema(schema::object(
            &[
                ("org_id", schema::org_id()),
                ("title", schema::string("Working title for the story.")),
                ("angle", schema::string("Editorial angle to take.")),
                (
                    "signal_ids",
                    schema::integer_list("Signals to attach to the story."),
                ),
            ],
            &["org_id", "title"],
        ))
        .build(|gateway, args: CreateStoryArgs| async move {
            let mut body = Map::new();
            body.insert("title".into(), Value::String(args.title));
            if let Some(angle) = args.angle.filter(|angle| !angle.is_empty()) {
                body.insert("angle".into(), Value::String(angle));
            }
            if let Some(ids) = args.signal_ids {
                body.insert("signal_ids".into(), json!(ids));
            }
            let options = RequestOptions::new()
                .org(args.org_id)
                .body(Value::Object(body));
            let response = gateway.post("/api/stories", options).await?;
            Ok(pretty_response(&response))
        })
}

fn get_story() -> GatewayTool {
    ToolBuilder::new("pressroom_get_story")
        .description("Get a story with its attached signals.")
        .input_schema(story_schema(&[], &[]))
        .build(|gateway, args: StoryArgs| async move {
            let response = gateway
                .get(
                    &format!("/api/stories/{}", args.story_id),
                    RequestOptions::new().org(args.org_id),
                )
                .await?;
            Ok(pretty_response(&response))
        })
}

fn add_signal_to_story() -> GatewayTool {
    ToolBuilder::new("pressroom_add_signal_to_story")
        .description("Attach a signal to a story, with optional editor notes.")
        .input_schema(story_schema(
            &[
                ("signal_id", schema::integer("The signal ID to attach.")),
                (
                    "editor_notes",
                    schema::string("Notes on how the signal should be used."),
                ),
            ],
            &["signal_id"],
        ))
        .build(|gateway, args: AddSignalArgs| async move {
            let mut body = Map::new();
            body.insert("signal_id".into(), json!(args.signal_id));
            if let Some(notes) = args.editor_notes.filter(|notes| !notes.is_empty()) {
                body.insert("editor_notes".into(), Value::String(notes));
            }
            let options = RequestOptions::new()
                .org(args.org_id)
                .body(Value::Object(body));
            let response = gateway
                .post(&format!("/api/stories/{}/signals", args.story_id), options)
                .await?;
            Ok(pretty_response(&response))
        })
}

fn generate_from_story() -> GatewayTool {
    ToolBuilder::new("pressroom_generate_from_story")
        .description("Generate content from a story's signals and angle.")
        .input_schema(story_schema(
            &[(
                "channels",
                schema::string_list("Optional list of channels to generate for."),
            )],
            &[],
        ))
        .build(|gateway, args: StoryGenerateArgs| async move {
            let channels = args.channels.unwrap_or_default();
            let options = RequestOptions::new()
                .org(args.org_id)
                .body(generate_body(&channels));
            let response = gateway
                .post(&format!("/api/stories/{}/generate", args.story_id), options)
                .await?;
            Ok(render(&response, format_generate))
        })
}

fn discover_signals() -> GatewayTool {
    ToolBuilder::new("pressroom_discover_signals")
        .description("Search the web for additional signals relevant to a story.")
        .input_schema(story_schema(&[], &[]))
        .build(|gateway, args: StoryArgs| async move {
            let response = gateway
                .post(
                    &format!("/api/stories/{}/discover", args.story_id),
                    RequestOptions::new().org(args.org_id),
                )
                .await?;
            Ok(pretty_response(&response))
        })
}

pub fn format_stories(data: &Value) -> String {
    render_list(data, "No stories found.", "stories", |story| {
        format!(
            "  #{} [{}] {} ({} signals)",
            json::text(story, "id", "?"),
            json::text(story, "status", "?"),
            json::text(story, "title", ""),
            json::items(story, "signals").len(),
        )
    })
}
