//! Signals on the wire, per-org wire sources and global (SIGINT) sources.

use super::builder::{GatewayTool, NoArgs, ToolBuilder};
use super::format::{pretty_response, render, render_list};
use super::schema;
use crate::gateway::RequestOptions;
use crate::utils::json;
use serde::Deserialize;
use serde_json::{Map, Value};

pub const DEFAULT_LIMIT: i64 = 50;

#[derive(Debug, Deserialize)]
struct LimitArgs {
    org_id: i64,
    #[serde(default = "default_limit")]
    limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

#[derive(Debug, Deserialize)]
struct OrgArgs {
    org_id: i64,
}

#[derive(Debug, Deserialize)]
struct NewSourceArgs {
    #[serde(default)]
    org_id: Option<i64>,
    #[serde(rename = "type")]
    kind: String,
    name: String,
    #[serde(default)]
    config: Option<Value>,
}

impl NewSourceArgs {
    fn body(self) -> Value {
        let mut body = Map::new();
        body.insert("type".into(), Value::String(self.kind));
        body.insert("name".into(), Value::String(self.name));
        if let Some(config) = self.config {
            body.insert("config".into(), config);
        }
        Value::Object(body)
    }
}

pub fn tools() -> Vec<GatewayTool> {
    vec![
        list_signals(),
        list_wire_sources(),
        create_wire_source(),
        fetch_wire(),
        list_wire_signals(),
        list_sources(),
        create_source(),
        sweep_sources(),
        get_feed(),
    ]
}

fn limit_schema(what: &str) -> Value {
    schema::object(
        &[
            ("org_id", schema::org_id()),
            (
                "limit",
                schema::integer_default(&format!("Max {what} to return."), DEFAULT_LIMIT),
            ),
        ],
        &["org_id"],
    )
}

fn new_source_schema(scoped: bool) -> Value {
    let mut properties = Vec::new();
    if scoped {
        properties.push(("org_id", schema::org_id()));
    }
    properties.extend([
        (
            "type",
            schema::string("Source type, e.g. github, hackernews, reddit, rss."),
        ),
        ("name", schema::string("Display name for the source.")),
        (
            "config",
            schema::free_object("Type-specific settings such as a feed URL or repo."),
        ),
    ]);
    let required: &[&str] = if scoped {
        &["org_id", "type", "name"]
    } else {
        &["type", "name"]
    };
    schema::object(&properties, required)
}

fn list_signals() -> GatewayTool {
    ToolBuilder::new("pressroom_list_signals")
        .description("List current signals (wire items) for an org.")
        .input_schema(limit_schema("signals"))
        .build(|gateway, args: LimitArgs| async move {
            let options = RequestOptions::new()
                .org(args.org_id)
                .query("limit", args.limit);
            let response = gateway.get("/api/signals", options).await?;
            Ok(render(&response, format_signals))
        })
}

fn list_wire_sources() -> GatewayTool {
    ToolBuilder::new("pressroom_list_wire_sources")
        .description("List the wire sources configured for an org.")
        .input_schema(schema::org_only())
        .build(|gateway, args: OrgArgs| async move {
            let response = gateway
                .get("/api/wire/sources", RequestOptions::new().org(args.org_id))
                .await?;
            Ok(pretty_response(&response))
        })
}

fn create_wire_source() -> GatewayTool {
    ToolBuilder::new("pressroom_create_wire_source")
        .description("Add a wire source (GitHub repo, RSS feed, subreddit, ...) to an org.")
        .input_schema(new_source_schema(true))
        .build(|gateway, args: NewSourceArgs| async move {
            let options = RequestOptions::new().maybe_org(args.org_id);
            let response = gateway
                .post("/api/wire/sources", options.body(args.body()))
                .await?;
            Ok(pretty_response(&response))
        })
}

fn fetch_wire() -> GatewayTool {
    ToolBuilder::new("pressroom_fetch_wire")
        .description("Fetch fresh items from all of an org's wire sources.")
        .input_schema(schema::org_only())
        .build(|gateway, args: OrgArgs| async move {
            let response = gateway
                .post("/api/wire/fetch", RequestOptions::new().org(args.org_id))
                .await?;
            Ok(pretty_response(&response))
        })
}

fn list_wire_signals() -> GatewayTool {
    ToolBuilder::new("pressroom_list_wire_signals")
        .description("List signals pulled in from an org's wire sources.")
        .input_schema(limit_schema("wire signals"))
        .build(|gateway, args: LimitArgs| async move {
            let options = RequestOptions::new()
                .org(args.org_id)
                .query("limit", args.limit);
            let response = gateway.get("/api/wire/signals", options).await?;
            Ok(render(&response, format_signals))
        })
}

fn list_sources() -> GatewayTool {
    ToolBuilder::new("pressroom_list_sources")
        .description("List global SIGINT sources shared across all orgs.")
        .input_schema(schema::object(&[], &[]))
        .build(|gateway, _args: NoArgs| async move {
            let response = gateway.get_json("/api/sources").await?;
            Ok(pretty_response(&response))
        })
}

fn create_source() -> GatewayTool {
    ToolBuilder::new("pressroom_create_source")
        .description("Add a global SIGINT source.")
        .input_schema(new_source_schema(false))
        .build(|gateway, args: NewSourceArgs| async move {
            let options = RequestOptions::new().maybe_org(args.org_id);
            let response = gateway
                .post("/api/sources", options.body(args.body()))
                .await?;
            Ok(pretty_response(&response))
        })
}

fn sweep_sources() -> GatewayTool {
    ToolBuilder::new("pressroom_sweep_sources")
        .description("Sweep every global SIGINT source for new items.")
        .input_schema(schema::object(&[], &[]))
        .build(|gateway, _args: NoArgs| async move {
            let response = gateway
                .post("/api/sources/sweep", RequestOptions::new())
                .await?;
            Ok(pretty_response(&response))
        })
}

fn get_feed() -> GatewayTool {
    ToolBuilder::new("pressroom_get_feed")
        .description("Get an org's feed: global source items filtered for relevance to the org.")
        .input_schema(limit_schema("feed items"))
        .build(|gateway, args: LimitArgs| async move {
            let options = RequestOptions::new()
                .org(args.org_id)
                .query("limit", args.limit);
            let response = gateway.get("/api/sources/feed", options).await?;
            Ok(pretty_response(&response))
        })
}

pub fn format_signals(data: &Value) -> String {
    render_list(data, "No signals on the wire.", "signals", |signal| {
        let priority = if json::bool_field(signal, "prioritized") {
            " *"
        } else {
            ""
        };
        format!(
            "  #{} [{}]{priority} {}: {}",
            json::text(signal, "id", "?"),
            json::text(signal, "type", "?"),
            json::text(signal, "source", ""),
            json::text(signal, "title", ""),
        )
    })
}
