use super::builder::{GatewayTool, ToolBuilder};
use super::format::pretty_response;
use super::schema;
use crate::gateway::RequestOptions;
use crate::pipeline;
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Deserialize)]
struct OnboardArgs {
    org_id: i64,
    domain: String,
    #[serde(default)]
    extra_context: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApplyArgs {
    org_id: i64,
    profile: Value,
}

#[derive(Debug, Deserialize)]
struct OrgArgs {
    org_id: i64,
}

pub fn tools() -> Vec<GatewayTool> {
    vec![onboard(), onboard_apply(), onboard_status()]
}

fn onboard() -> GatewayTool {
    ToolBuilder::new("pressroom_onboard")
        .description(
            "Onboard a company: crawl its domain, then synthesize a profile (industry, topics, competitors). \
             Nothing is saved until pressroom_onboard_apply is called.",
        )
        .input_schema(schema::object(
            &[
                ("org_id", schema::org_id()),
                ("domain", schema::string("Company domain to crawl, e.g. \"acme.dev\".")),
                (
                    "extra_context",
                    schema::string("Optional notes to steer profile synthesis."),
                ),
            ],
            &["org_id", "domain"],
        ))
        .build_pipeline(|gateway, args: OnboardArgs| async move {
            pipeline::onboard(&gateway, args.org_id, &args.domain, args.extra_context).await
        })
}

fn onboard_apply() -> GatewayTool {
    ToolBuilder::new("pressroom_onboard_apply")
        .description("Save a synthesized (and optionally edited) company profile to the org.")
        .input_schema(schema::object(
            &[
                ("org_id", schema::org_id()),
                (
                    "profile",
                    schema::free_object("Profile object as returned by pressroom_onboard."),
                ),
            ],
            &["org_id", "profile"],
        ))
        .build(|gateway, args: ApplyArgs| async move {
            let options = RequestOptions::new()
                .org(args.org_id)
                .body(json!({ "profile": args.profile }));
            let response = gateway.post("/api/onboard/apply", options).await?;
            Ok(pretty_response(&response))
        })
}

fn onboard_status() -> GatewayTool {
    ToolBuilder::new("pressroom_onboard_status")
        .description("Show onboarding progress for an org: profile, sources and integrations.")
        .input_schema(schema::org_only())
        .build(|gateway, args: OrgArgs| async move {
            let response = gateway
                .get("/api/onboard/status", RequestOptions::new().org(args.org_id))
                .await?;
            Ok(pretty_response(&response))
        })
}
