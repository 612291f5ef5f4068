//! SEO audits, the cross-org scoreboard and SEO pull-request runs.

use super::builder::{GatewayTool, NoArgs, ToolBuilder};
use super::format::{pretty_response, render, render_list, render_prefixed};
use super::schema;
use crate::gateway::RequestOptions;
use crate::utils::json;
use serde::Deserialize;
use serde_json::{Map, Value, json};

pub const DEFAULT_HISTORY_LIMIT: i64 = 20;

#[derive(Debug, Deserialize)]
struct AuditArgs {
    org_id: i64,
    #[serde(default)]
    domain: String,
    #[serde(default = "default_deep")]
    deep: bool,
}

fn default_deep() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct HistoryArgs {
    org_id: i64,
    #[serde(default)]
    audit_type: String,
    #[serde(default = "default_history_limit")]
    limit: i64,
}

fn default_history_limit() -> i64 {
    DEFAULT_HISTORY_LIMIT
}

#[derive(Debug, Deserialize)]
struct OrgArgs {
    org_id: i64,
}

#[derive(Debug, Deserialize)]
struct SeoPrRunArgs {
    org_id: i64,
    repo_url: String,
    #[serde(default)]
    domain: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SeoPrStatusArgs {
    org_id: i64,
    run_id: i64,
}

pub fn tools() -> Vec<GatewayTool> {
    vec![
        audit(),
        scoreboard(),
        audit_history(),
        seo_pr_run(),
        seo_pr_list(),
        seo_pr_status(),
    ]
}

fn audit() -> GatewayTool {
    ToolBuilder::new("pressroom_audit")
        .description(
            "Run an SEO audit on a domain. If domain is empty, uses the org's configured domain.",
        )
        .input_schema(schema::object(
            &[
                ("org_id", schema::org_id()),
                (
                    "domain",
                    schema::string_default(
                        "Domain to audit (e.g. \"example.com\"). Leave empty to use org default.",
                        "",
                    ),
                ),
                (
                    "deep",
                    schema::boolean_default(
                        "Run the deep model-powered analysis; false runs basic checks only.",
                        true,
                    ),
                ),
            ],
            &["org_id"],
        ))
        .build(|gateway, args: AuditArgs| async move {
            let options = RequestOptions::new()
                .org(args.org_id)
                .body(json!({ "domain": args.domain }))
                .query("deep", args.deep);
            let response = gateway.post("/api/audit/seo", options).await?;
            Ok(render_prefixed("Audit error: ", &response, format_audit))
        })
}

fn scoreboard() -> GatewayTool {
    ToolBuilder::new("pressroom_scoreboard")
        .description("Get the scoreboard: all orgs ranked by SEO score and content activity.")
        .input_schema(schema::object(&[], &[]))
        .build(|gateway, _args: NoArgs| async move {
            let response = gateway.get_json("/api/scoreboard").await?;
            Ok(render(&response, format_scoreboard))
        })
}

fn audit_history() -> GatewayTool {
    ToolBuilder::new("pressroom_audit_history")
        .description("Get audit history for an org: past SEO and README audit results.")
        .input_schema(schema::object(
            &[
                ("org_id", schema::org_id()),
                (
                    "audit_type",
                    schema::string_default("Optional filter: \"seo\" or \"readme\".", ""),
                ),
                (
                    "limit",
                    schema::integer_default("Max results to return.", DEFAULT_HISTORY_LIMIT),
                ),
            ],
            &["org_id"],
        ))
        .build(|gateway, args: HistoryArgs| async move {
            let options = RequestOptions::new()
                .org(args.org_id)
                .query("limit", args.limit)
                .query_non_empty("audit_type", &args.audit_type);
            let response = gateway.get("/api/audit/history", options).await?;
            Ok(render(&response, format_audit_history))
        })
}

fn seo_pr_run() -> GatewayTool {
    ToolBuilder::new("pressroom_seo_pr_run")
        .description(
            "Start an SEO pull-request run: audit the site and open a PR with fixes against its repo.",
        )
        .input_schema(schema::object(
            &[
                ("org_id", schema::org_id()),
                ("repo_url", schema::string("Repository to open the PR against.")),
                (
                    "domain",
                    schema::string("Domain to audit. Defaults to the org's domain."),
                ),
            ],
            &["org_id", "repo_url"],
        ))
        .build(|gateway, args: SeoPrRunArgs| async move {
            let mut body = Map::new();
            body.insert("repo_url".into(), Value::String(args.repo_url));
            if let Some(domain) = args.domain.filter(|domain| !domain.is_empty()) {
                body.insert("domain".into(), Value::String(domain));
            }
            let options = RequestOptions::new()
                .org(args.org_id)
                .body(Value::Object(body));
            let response = gateway.post("/api/seo-pr/run", options).await?;
            Ok(pretty_response(&response))
        })
}

fn seo_pr_list() -> GatewayTool {
    ToolBuilder::new("pressroom_seo_pr_list")
        .description("List SEO pull-request runs for an org.")
        .input_schema(schema::org_only())
        .build(|gateway, args: OrgArgs| async move {
            let response = gateway
                .get("/api/seo-pr/runs", RequestOptions::new().org(args.org_id))
                .await?;
            Ok(pretty_response(&response))
        })
}

fn seo_pr_status() -> GatewayTool {
    ToolBuilder::new("pressroom_seo_pr_status")
        .description("Get the status and PR link of one SEO pull-request run.")
        .input_schema(schema::object(
            &[
                ("org_id", schema::org_id()),
                ("run_id", schema::integer("The SEO PR run ID.")),
            ],
            &["org_id", "run_id"],
        ))
        .build(|gateway, args: SeoPrStatusArgs| async move {
            let response = gateway
                .get(
                    &format!("/api/seo-pr/runs/{}", args.run_id),
                    RequestOptions::new().org(args.org_id),
                )
                .await?;
            Ok(pretty_response(&response))
        })
}

pub fn format_audit(data: &Value) -> String {
    let score = json::text_or_nested(data, "score", "recommendations", "?");
    let issues = json::text_or_nested(data, "total_issues", "recommendations", "0");
    format!(
        "SEO Audit complete. Score: {score}, Issues: {issues}\n\n{}",
        json::pretty(data)
    )
}

pub fn format_scoreboard(data: &Value) -> String {
    let orgs = json::as_list(data);
    let rows = orgs
        .iter()
        .map(|org| {
            format!(
                "  {} ({}) — SEO: {}, AI citable: {}, Signals 7d: {}, Published: {}, Last active: {}",
                json::text(org, "org_name", "?"),
                json::text(org, "domain", "?"),
                json::text(org, "seo_score", "—"),
                json::text(org, "ai_citability", "?"),
                json::text(org, "signals_count", "0"),
                json::text(org, "content_published", "0"),
                json::text(org, "last_active", "—"),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("Scoreboard ({} orgs):\n{rows}", orgs.len())
}

pub fn format_audit_history(data: &Value) -> String {
    render_list(data, "No audit history found.", "audits", |audit| {
        format!(
            "  #{} [{}] {} — Score: {}, Issues: {}, Date: {}",
            json::text(audit, "id", "?"),
            json::text(audit, "audit_type", "?"),
            json::text(audit, "target", "?"),
            json::text(audit, "score", "?"),
            json::text(audit, "total_issues", "0"),
            json::text(audit, "created_at", "?"),
        )
    })
}
