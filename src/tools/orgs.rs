use super::builder::{GatewayTool, NoArgs, ToolBuilder};
use super::format::pretty_response;
use super::schema;
use crate::gateway::RequestOptions;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct OrgArgs {
    org_id: i64,
}

pub fn tools() -> Vec<GatewayTool> {
    vec![list_orgs(), get_org()]
}

fn list_orgs() -> GatewayTool {
    ToolBuilder::new("pressroom_list_orgs")
        .description("List all organizations in Pressroom. Returns org id, name, and domain for each.")
        .input_schema(schema::object(&[], &[]))
        .build(|gateway, _args: NoArgs| async move {
            let response = gateway.get_json("/api/orgs").await?;
            Ok(pretty_response(&response))
        })
}

fn get_org() -> GatewayTool {
    ToolBuilder::new("pressroom_get_org")
        .description(
            "Get details for a specific organization including settings and team members.",
        )
        .input_schema(schema::org_only())
        .build(|gateway, args: OrgArgs| async move {
            let response = gateway
                .get(&format!("/api/orgs/{}", args.org_id), RequestOptions::new().unscoped())
                .await?;
            Ok(pretty_response(&response))
        })
}
