//! Pure rendering helpers shared by the tool modules.

use crate::gateway::{ApiFailure, ApiResponse};
use crate::utils::json;
use serde_json::Value;

/// `"<prefix><message>"`, followed by the full error object when the
/// backend sent more than just `"error"`.
pub fn failure_text(prefix: &str, failure: &ApiFailure) -> String {
    let has_extra = failure
        .payload
        .as_object()
        .is_some_and(|object| object.keys().any(|key| key != "error"));
    if has_extra {
        format!(
            "{prefix}{}\n\n{}",
            failure.message,
            json::pretty(&failure.payload)
        )
    } else {
        format!("{prefix}{}", failure.message)
    }
}

pub fn error_text(failure: &ApiFailure) -> String {
    failure_text("Error: ", failure)
}

/// Render a success with `summary`, a failure as `Error: ...`.
pub fn render(response: &ApiResponse, summary: impl FnOnce(&Value) -> String) -> String {
    render_prefixed("Error: ", response, summary)
}

pub fn render_prefixed(
    prefix: &str,
    response: &ApiResponse,
    summary: impl FnOnce(&Value) -> String,
) -> String {
    match response {
        ApiResponse::Success(data) => summary(data),
        ApiResponse::Failure(failure) => failure_text(prefix, failure),
    }
}

/// Default rendering: the payload pretty-printed.
pub fn pretty_response(response: &ApiResponse) -> String {
    render(response, json::pretty)
}

/// `"<n> <noun>:\n<rows>"`, or `empty` for an empty payload. A non-list
/// payload is shown as JSON.
pub fn render_list(data: &Value, empty: &str, noun: &str, row: impl Fn(&Value) -> String) -> String {
    if json::is_empty(data) {
        return empty.to_string();
    }
    if !data.is_array() {
        return json::pretty(data);
    }
    let items = json::as_list(data);
    let rows = items.iter().map(row).collect::<Vec<_>>().join("\n");
    format!("{} {noun}:\n{rows}", items.len())
}
