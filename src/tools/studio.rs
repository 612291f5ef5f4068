//! YouTube scripts and prompt skills.

use super::builder::{GatewayTool, NoArgs, ToolBuilder};
use super::format::{pretty_response, render, render_list};
use super::schema;
use crate::gateway::RequestOptions;
use crate::utils::json;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Skills the backend pipeline invokes on its own.
pub const WIRED_SKILLS: [&str; 2] = ["humanizer", "seo_geo"];

#[derive(Debug, Deserialize)]
struct ScriptArgs {
    org_id: i64,
    #[serde(default)]
    content_id: Option<i64>,
    #[serde(default)]
    brief: String,
}

#[derive(Debug, Deserialize)]
struct OrgArgs {
    org_id: i64,
}

#[derive(Debug, Deserialize)]
struct ExportArgs {
    script_id: i64,
    #[serde(default)]
    org_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct SkillArgs {
    skill_name: String,
}

#[derive(Debug, Deserialize)]
struct InvokeArgs {
    skill_name: String,
    input_text: String,
}

pub fn tools() -> Vec<GatewayTool> {
    vec![
        youtube_script(),
        youtube_list(),
        youtube_export(),
        list_skills(),
        get_skill(),
        invoke_skill(),
    ]
}

fn youtube_script() -> GatewayTool {
    ToolBuilder::new("pressroom_youtube_script")
        .description(
            "Generate a YouTube script from a content item or a free-form brief: hook, sections, \
             talking points, lower thirds and video metadata.",
        )
        .input_schema(schema::object(
            &[
                ("org_id", schema::org_id()),
                (
                    "content_id",
                    schema::integer("Optional content item ID to base the script on."),
                ),
                (
                    "brief",
                    schema::string_default("Optional free-form brief if not using content_id.", ""),
                ),
            ],
            &["org_id"],
        ))
        .build(|gateway, args: ScriptArgs| async move {
            let options = RequestOptions::new()
                .org(args.org_id)
                .body(script_body(args.content_id, &args.brief));
            let response = gateway.post("/api/youtube/generate", options).await?;
            Ok(render(&response, format_youtube_script))
        })
}

fn youtube_list() -> GatewayTool {
    ToolBuilder::new("pressroom_youtube_list")
        .description("List YouTube scripts for an org.")
        .input_schema(schema::org_only())
        .build(|gateway, args: OrgArgs| async move {
            let response = gateway
                .get("/api/youtube/scripts", RequestOptions::new().org(args.org_id))
                .await?;
            Ok(render(&response, format_youtube_list))
        })
}

fn youtube_export() -> GatewayTool {
    ToolBuilder::new("pressroom_youtube_export")
        .description("Export a YouTube script as a Remotion JSON package for video production.")
        .input_schema(schema::object(
            &[
                ("script_id", schema::integer("The YouTube script ID.")),
                ("org_id", schema::org_id()),
            ],
            &["script_id"],
        ))
        .build(|gateway, args: ExportArgs| async move {
            let path = format!("/api/youtube/scripts/{}/export", args.script_id);
            let response = gateway
                .get(&path, RequestOptions::new().unscoped().maybe_org(args.org_id))
                .await?;
            Ok(pretty_response(&response))
        })
}

fn list_skills() -> GatewayTool {
    ToolBuilder::new("pressroom_list_skills")
        .description("List available skills (prompt templates) and whether the pipeline uses them.")
        .input_schema(schema::object(&[], &[]))
        .build(|gateway, _args: NoArgs| async move {
            let response = gateway.get_json("/api/skills").await?;
            Ok(render(&response, format_skills))
        })
}

fn get_skill() -> GatewayTool {
    ToolBuilder::new("pressroom_get_skill")
        .description("Get the full content of a skill file.")
        .input_schema(schema::object(
            &[(
                "skill_name",
                schema::string("The skill name (e.g. \"humanizer\", \"seo_geo\")."),
            )],
            &["skill_name"],
        ))
        .build(|gateway, args: SkillArgs| async move {
            let response = gateway
                .get_json(&format!("/api/skills/{}", args.skill_name))
                .await?;
            Ok(render(&response, format_skill))
        })
}

fn invoke_skill() -> GatewayTool {
    ToolBuilder::new("pressroom_invoke_skill")
        .description("Run input text through a skill's prompt and return the result.")
        .input_schema(schema::object(
            &[
                (
                    "skill_name",
                    schema::string("The skill to invoke (e.g. \"humanizer\")."),
                ),
                ("input_text", schema::string("The text to process with the skill.")),
            ],
            &["skill_name", "input_text"],
        ))
        .build(|gateway, args: InvokeArgs| async move {
            let options = RequestOptions::new()
                .unscoped()
                .body(serde_json::json!({ "text": args.input_text }));
            let response = gateway
                .post(&format!("/api/skills/invoke/{}", args.skill_name), options)
                .await?;
            Ok(pretty_response(&response))
        })
}

pub fn script_body(content_id: Option<i64>, brief: &str) -> Value {
    let mut body = Map::new();
    if let Some(id) = content_id {
        body.insert("content_id".into(), Value::from(id));
    }
    if !brief.is_empty() {
        body.insert("brief".into(), Value::String(brief.to_string()));
    }
    Value::Object(body)
}

pub fn format_youtube_script(data: &Value) -> String {
    format!(
        "YouTube script generated: #{}\nTitle: {}\nHook: {}\nStatus: {}\n\nFull script:\n{}",
        json::text(data, "id", "?"),
        json::text(data, "title", "?"),
        json::text(data, "hook", "?"),
        json::text(data, "status", "?"),
        json::pretty(data),
    )
}

pub fn format_youtube_list(data: &Value) -> String {
    render_list(data, "No YouTube scripts found.", "scripts", |script| {
        format!(
            "  #{} [{}] {} — {}",
            json::text(script, "id", "?"),
            json::text(script, "status", "?"),
            json::text(script, "title", "?"),
            json::text(script, "created_at", "?"),
        )
    })
}

pub fn format_skills(data: &Value) -> String {
    render_list(data, "No skills found.", "skills", |skill| {
        let name = json::text(skill, "name", "?");
        let wiring = if WIRED_SKILLS.contains(&name.as_str()) {
            "WIRED"
        } else {
            "AVAILABLE"
        };
        format!(
            "  {name} [{wiring}] — {}",
            json::text(skill, "first_line", "")
        )
    })
}

pub fn format_skill(data: &Value) -> String {
    format!(
        "Skill: {}\n\n{}",
        json::text(data, "name", "?"),
        json::text(data, "content", "")
    )
}
