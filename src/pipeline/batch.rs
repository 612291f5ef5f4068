//! Per-id fan-in for `approve` and `spike_content`.
//!
//! Unlike [`super::Pipeline`], a failure here never stops the run: every id
//! is attempted, one at a time, in input order.

use crate::gateway::{ApiFailure, ApiResponse, GatewayClient, HttpMethod, RequestOptions};
use serde_json::Value;
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub enum BatchOutcome {
    Done(Value),
    Failed(ApiFailure),
    /// The call for this id never completed.
    Fault(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchEntry {
    pub id: i64,
    pub outcome: BatchOutcome,
}

/// A single call to repeat for every id.
#[derive(Debug, Clone)]
pub struct BatchCall {
    pub method: HttpMethod,
    pub path: String,
    pub options: RequestOptions,
}

pub async fn run_batch<F>(gateway: &GatewayClient, ids: &[i64], mut call_for: F) -> Vec<BatchEntry>
where
    F: FnMut(i64) -> BatchCall,
{
    let mut entries = Vec::with_capacity(ids.len());
    for &id in ids {
        let call = call_for(id);
        let outcome = match gateway.request(call.method, &call.path, call.options).await {
            Ok(ApiResponse::Success(value)) => BatchOutcome::Done(value),
            Ok(ApiResponse::Failure(failure)) => BatchOutcome::Failed(failure),
            Err(fault) => {
                warn!(id, error = %fault, "batch call did not complete");
                BatchOutcome::Fault(fault.to_string())
            }
        };
        entries.push(BatchEntry { id, outcome });
    }
    entries
}

/// `"<title> <n> items:"` followed by one `#<id>: <status>` line per id.
pub fn render_batch(title: &str, done_word: &str, entries: &[BatchEntry]) -> String {
    let mut out = format!("{title} {} items:", entries.len());
    for entry in entries {
        let status = match &entry.outcome {
            BatchOutcome::Done(_) => done_word.to_string(),
            BatchOutcome::Failed(failure) => failure.message.clone(),
            BatchOutcome::Fault(fault) => format!("backend unreachable: {fault}"),
        };
        out.push_str(&format!("\n  #{}: {status}", entry.id));
    }
    out
}

/// `POST /api/content/{id}/action` with the given action, for every id.
pub async fn content_action(
    gateway: &GatewayClient,
    org_id: i64,
    ids: &[i64],
    action: &str,
) -> Vec<BatchEntry> {
    run_batch(gateway, ids, |id| BatchCall {
        method: HttpMethod::Post,
        path: format!("/api/content/{id}/action"),
        options: RequestOptions::new()
            .org(org_id)
            .body(serde_json::json!({ "action": action })),
    })
    .await
}
