use super::builder::{GatewayTool, ToolBuilder};
use super::format::pretty_response;
use super::schema;
use crate::gateway::RequestOptions;
use serde::Deserialize;

pub const DEFAULT_ACTIVITY_LIMIT: i64 = 50;

#[derive(Debug, Deserialize)]
struct OrgArgs {
    org_id: i64,
}

#[derive(Debug, Deserialize)]
struct ActivityArgs {
    org_id: i64,
    #[serde(default = "default_activity_limit")]
    limit: i64,
}

fn default_activity_limit() -> i64 {
    DEFAULT_ACTIVITY_LIMIT
}

/// Read-only listings over the org's workspace resources.
const LISTINGS: [(&str, &str, &str); 5] = [
    (
        "pressroom_list_assets",
        "List the org's uploaded assets: logos, images and documents.",
        "/api/assets",
    ),
    (
        "pressroom_list_datasources",
        "List connected data sources (analytics, CRM, search console).",
        "/api/datasources",
    ),
    (
        "pressroom_list_properties",
        "List the org's web properties: sites, blogs and docs.",
        "/api/properties",
    ),
    (
        "pressroom_get_brand",
        "Get the org's brand kit: voice, colors, banned phrases.",
        "/api/brand",
    ),
    (
        "pressroom_usage",
        "Show model and API usage for the org in the current billing period.",
        "/api/usage",
    ),
];

pub fn tools() -> Vec<GatewayTool> {
    let mut tools: Vec<GatewayTool> = LISTINGS
        .iter()
        .map(|&(name, description, path)| listing(name, description, path))
        .collect();
    tools.push(activity_log());
    tools
}

fn listing(name: &'static str, description: &'static str, path: &'static str) -> GatewayTool {
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

fn activity_log() -> GatewayTool {
    ToolBuilder::new("pressroom_activity_log")
        .description("Recent activity for the org: pipeline runs, approvals, publishes, edits.")
        .input_schema(schema::object(
            &[
                ("org_id", schema::org_id()),
                (
                    "limit",
                    schema::integer_default("Max entries to return.", DEFAULT_ACTIVITY_LIMIT),
                ),
            ],
            &["org_id"],
        ))
        .build(|gateway, args: ActivityArgs| async move {
            let options = RequestOptions::new()
                .org(args.org_id)
                .query("limit", args.limit);
            let response = gateway.get("/api/activity", options).await?;
            Ok(pretty_response(&response))
        })
}
