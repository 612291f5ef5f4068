//! Read-only smoke suite against a live backend.
//!
//! A case passes when the tool invocation completes, including when the
//! backend answers with a business error. It fails on transport faults and
//! rejected arguments. Org-scoped cases are skipped when no org is known.

use crate::gateway::GatewayClient;
use crate::tools::{ToolContext, ToolRegistry};
use crate::utils::{json, text};
use serde_json::{Value, json};
use std::fmt;

const PREVIEW_CHARS: usize = 120;
const SMOKE_LIMIT: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmokeStatus {
    Pass,
    Fail,
    Skip,
}

impl fmt::Display for SmokeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::Skip => "SKIP",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmokeLine {
    pub label: String,
    pub status: SmokeStatus,
    pub detail: String,
}

#[derive(Debug, Default)]
pub struct SmokeReport {
    pub org_id: Option<i64>,
    pub lines: Vec<SmokeLine>,
}

impl SmokeReport {
    fn count(&self, status: SmokeStatus) -> usize {
        self.lines.iter().filter(|line| line.status == status).count()
    }

    pub fn passed(&self) -> usize {
        self.count(SmokeStatus::Pass)
    }

    pub fn failed(&self) -> usize {
        self.count(SmokeStatus::Fail)
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        match self.org_id {
            Some(org) => out.push_str(&format!("Smoke suite (org {org})\n")),
            None => out.push_str("Smoke suite (no org)\n"),
        }
        for line in &self.lines {
            out.push_str(&format!("  {}  {} — {}\n", line.status, line.label, line.detail));
        }
        out.push_str(&format!(
            "Results: {} passed, {} failed",
            self.passed(),
            self.failed()
        ));
        out
    }
}

/// One smoke invocation. `None` args mark an org-scoped case.
struct Case {
    label: &'static str,
    tool: &'static str,
    args: Option<Value>,
}

fn cases(org_id: Option<i64>) -> Vec<Case> {
    let scoped = |label, tool, extra: Value| {
        let args = org_id.map(|org| {
            let mut args = json!({ "org_id": org });
            if let (Some(target), Value::Object(extra)) = (args.as_object_mut(), extra) {
                target.extend(extra);
            }
            args
        });
        Case { label, tool, args }
    };
    let global = |label, tool, args: Value| Case {
        label,
        tool,
        args: Some(args),
    };

    vec![
        scoped("get_org", "pressroom_get_org", json!({})),
        scoped("list_signals", "pressroom_list_signals", json!({"limit": SMOKE_LIMIT})),
        scoped(
            "list_content (queued)",
            "pressroom_list_content",
            json!({"status": "queued", "limit": SMOKE_LIMIT}),
        ),
        scoped(
            "list_content (all)",
            "pressroom_list_content",
            json!({"status": "", "limit": SMOKE_LIMIT}),
        ),
        scoped("list_stories", "pressroom_list_stories", json!({})),
        scoped("list_wire_sources", "pressroom_list_wire_sources", json!({})),
        scoped(
            "list_wire_signals",
            "pressroom_list_wire_signals",
            json!({"limit": SMOKE_LIMIT}),
        ),
        global("list_sources", "pressroom_list_sources", json!({})),
        scoped("get_feed", "pressroom_get_feed", json!({"limit": SMOKE_LIMIT})),
        scoped("get_settings", "pressroom_get_settings", json!({})),
        scoped("connection_status", "pressroom_connection_status", json!({})),
        global("scoreboard", "pressroom_scoreboard", json!({})),
        scoped("audit_history", "pressroom_audit_history", json!({})),
        scoped("seo_pr_list", "pressroom_seo_pr_list", json!({})),
        scoped("competitive_results", "pressroom_competitive_results", json!({})),
        scoped("ai_visibility_results", "pressroom_ai_visibility_results", json!({})),
        scoped("analytics", "pressroom_analytics", json!({})),
        scoped("onboard_status", "pressroom_onboard_status", json!({})),
        scoped("list_team", "pressroom_list_team", json!({})),
        scoped("list_email_drafts", "pressroom_list_email_drafts", json!({})),
        scoped("youtube_list", "pressroom_youtube_list", json!({})),
        global("list_skills", "pressroom_list_skills", json!({})),
        global(
            "get_skill (humanizer)",
            "pressroom_get_skill",
            json!({"skill_name": "humanizer"}),
        ),
    ]
}

/// First org id the backend lists, if any.
async fn first_org(gateway: &GatewayClient) -> Option<i64> {
    let orgs = gateway.get_json("/api/orgs").await.ok()?.into_result().ok()?;
    json::as_list(&orgs)
        .first()
        .and_then(|org| org.get("id"))
        .and_then(Value::as_i64)
}

async fn invoke(registry: &ToolRegistry, ctx: &ToolContext, label: &str, tool: &str, args: Value) -> SmokeLine {
    let (status, detail) = match registry.execute(tool, args, ctx).await {
        Ok(result) if result.success => (
            SmokeStatus::Pass,
            text::preview(&result.output.replace('\n', " "), PREVIEW_CHARS),
        ),
        Ok(result) => (SmokeStatus::Fail, result.display_text().to_string()),
        Err(err) => (SmokeStatus::Fail, err.to_string()),
    };
    SmokeLine {
        label: label.to_string(),
        status,
        detail,
    }
}

/// Run the suite. `org_override` pins the org; otherwise the first listed
/// org is used.
pub async fn run_smoke(
    registry: &ToolRegistry,
    ctx: &ToolContext,
    org_override: Option<i64>,
) -> SmokeReport {
    let mut report = SmokeReport::default();

    let orgs = invoke(registry, ctx, "list_orgs", "pressroom_list_orgs", json!({})).await;
    let listed_orgs = orgs.status == SmokeStatus::Pass;
    report.lines.push(orgs);

    report.org_id = match org_override {
        Some(org) => Some(org),
        None if listed_orgs => first_org(&ctx.gateway).await,
        None => None,
    };

    for case in cases(report.org_id) {
        let line = match case.args {
            Some(args) => invoke(registry, ctx, case.label, case.tool, args).await,
            None => SmokeLine {
                label: case.label.to_string(),
                status: SmokeStatus::Skip,
                detail: "no org".to_string(),
            },
        };
        report.lines.push(line);
    }
    report
}
