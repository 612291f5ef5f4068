//! Team roster and outbound email drafts.

use super::builder::{GatewayTool, ToolBuilder};
use super::format::pretty_response;
use super::schema;
use crate::gateway::RequestOptions;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct OrgArgs {
    org_id: i64,
}

#[derive(Debug, Deserialize, Serialize)]
struct NewMember {
    #[serde(skip_serializing)]
    org_id: i64,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    linkedin_url: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
struct ComposeArgs {
    #[serde(skip_serializing)]
    org_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    recipient: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    brief: Option<String>,
}

pub fn tools() -> Vec<GatewayTool> {
    vec![
        list_team(),
        add_team_member(),
        discover_team(),
        compose_email(),
        list_email_drafts(),
    ]
}

fn list_team() -> GatewayTool {
    ToolBuilder::new("pressroom_list_team")
        .description("List the org's team members and their public profiles.")
        .input_schema(schema::org_only())
        .build(|gateway, args: OrgArgs| async move {
            let response = gateway
                .get("/api/team", RequestOptions::new().org(args.org_id))
                .await?;
            Ok(pretty_response(&response))
        })
}

fn add_team_member() -> GatewayTool {
    ToolBuilder::new("pressroom_add_team_member")
        .description("Add a team member whose voice and expertise content can draw on.")
        .input_schema(schema::object(
            &[
                ("org_id", schema::org_id()),
                ("name", schema::string("Full name.")),
                ("email", schema::string("Work email.")),
                ("role", schema::string("Role or title.")),
                ("linkedin_url", schema::string("LinkedIn profile URL.")),
            ],
            &["org_id", "name"],
        ))
        .build(|gateway, member: NewMember| async move {
            let options = RequestOptions::new()
                .org(member.org_id)
                .body(to_body(&member));
            let response = gateway.post("/api/team", options).await?;
            Ok(pretty_response(&response))
        })
}

fn discover_team() -> GatewayTool {
    ToolBuilder::new("pressroom_discover_team")
        .description("Discover team members from the org's website and public sources.")
        .input_schema(schema::org_only())
        .build(|gateway, args: OrgArgs| async move {
            let response = gateway
                .post("/api/team/discover", RequestOptions::new().org(args.org_id))
                .await?;
            Ok(pretty_response(&response))
        })
}

fn compose_email() -> GatewayTool {
    ToolBuilder::new("pressroom_compose_email")
        .description(
            "Draft an outreach email, from a content item or a free-form brief. The draft is saved, not sent.",
        )
        .input_schema(schema::object(
            &[
                ("org_id", schema::org_id()),
                ("content_id", schema::integer("Content item to base the email on.")),
                ("recipient", schema::string("Who the email is for.")),
                ("brief", schema::string("Free-form brief when not using content_id.")),
            ],
            &["org_id"],
        ))
        .build(|gateway, args: ComposeArgs| async move {
            let options = RequestOptions::new().org(args.org_id).body(to_body(&args));
            let response = gateway.post("/api/email/compose", options).await?;
            Ok(pretty_response(&response))
        })
}

fn list_email_drafts() -> GatewayTool {
    ToolBuilder::new("pressroom_list_email_drafts")
        .description("List saved email drafts for an org.")
        .input_schema(schema::org_only())
        .build(|gateway, args: OrgArgs| async move {
            let response = gateway
                .get("/api/email/drafts", RequestOptions::new().org(args.org_id))
                .await?;
            Ok(pretty_response(&response))
        })
}

fn to_body(value: &impl Serialize) -> Value {
    serde_json::to_value(value).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
}
