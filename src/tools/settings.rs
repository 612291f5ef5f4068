use super::builder::{GatewayTool, ToolBuilder};
use super::format::pretty_response;
use super::schema;
use crate::gateway::RequestOptions;
use serde::Deserialize;
use serde_json::{Map, Value, json};

#[derive(Debug, Deserialize)]
struct OrgArgs {
    org_id: i64,
}

#[derive(Debug, Deserialize)]
struct UpdateArgs {
    org_id: i64,
    settings: Map<String, Value>,
}

pub fn tools() -> Vec<GatewayTool> {
    vec![get_settings(), update_settings(), connection_status()]
}

fn get_settings() -> GatewayTool {
    ToolBuilder::new("pressroom_get_settings")
        .description("Get an org's settings: voice, channels, integrations and defaults.")
        .input_schema(schema::org_only())
        .build(|gateway, args: OrgArgs| async move {
            let response = gateway
                .get("/api/settings", RequestOptions::new().org(args.org_id))
                .await?;
            Ok(pretty_response(&response))
        })
}

fn update_settings() -> GatewayTool {
    ToolBuilder::new("pressroom_update_settings")
        .description("Update one or more org settings. Only the keys given are changed.")
        .input_schema(schema::object(
            &[
                ("org_id", schema::org_id()),
                (
                    "settings",
                    schema::free_object("Setting keys and their new values."),
                ),
            ],
            &["org_id", "settings"],
        ))
        .build(|gateway, args: UpdateArgs| async move {
            if args.settings.is_empty() {
                return Ok("Error: no settings given.".to_string());
            }
            let options = RequestOptions::new()
                .org(args.org_id)
                .body(json!({ "settings": args.settings }));
            let response = gateway.put("/api/settings", options).await?;
            Ok(pretty_response(&response))
        })
}

fn connection_status() -> GatewayTool {
    ToolBuilder::new("pressroom_connection_status")
        .description("Show which publishing and data integrations are connected for an org.")
        .input_schema(schema::org_only())
        .build(|gateway, args: OrgArgs| async move {
            let response = gateway
                .get("/api/settings/status", RequestOptions::new().org(args.org_id))
                .await?;
            Ok(pretty_response(&response))
        })
}
