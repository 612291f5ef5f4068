use crate::support::Harness;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn serve(server: &MockServer, verb: &str, route: &str, template: ResponseTemplate) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(template)
        .mount(server)
        .await;
}

#[tokio::test]
async fn business_error_renders_as_text() {
    let server = MockServer::start().await;
    serve(
        &server,
        "GET",
        "/api/orgs/99",
        ResponseTemplate::new(404).set_body_json(json!({"error": "org not found"})),
    )
    .await;

    let result = Harness::new(&server)
        .call("pressroom_get_org", json!({"org_id": 99}))
        .await;
    assert!(result.success);
    assert_eq!(result.output, "Error: org not found");
}

#[tokio::test]
async fn business_error_with_detail_shows_payload() {
    let server = MockServer::start().await;
    serve(
        &server,
        "GET",
        "/api/settings",
        ResponseTemplate::new(403).set_body_json(json!({"error": "forbidden", "required_role": "admin"})),
    )
    .await;

    let text = Harness::new(&server)
        .text("pressroom_get_settings", json!({"org_id": 1}))
        .await;
    assert!(text.starts_with("Error: forbidden\n\n{"));
    assert!(text.contains("\"required_role\": \"admin\""));
}

#[tokio::test]
async fn audit_uses_its_own_error_prefix() {
    let server = MockServer::start().await;
    serve(
        &server,
        "POST",
        "/api/audit/seo",
        ResponseTemplate::new(400).set_body_json(json!({"error": "no domain configured"})),
    )
    .await;

    let text = Harness::new(&server)
        .text("pressroom_audit", json!({"org_id": 1}))
        .await;
    assert_eq!(text, "Audit error: no domain configured");
}

#[tokio::test]
async fn content_listing_summarizes_rows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/content"))
        .and(query_param("status", "queued"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 8, "channel": "blog", "status": "queued", "headline": "Rust at scale", "body": "Short body."}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let text = Harness::new(&server)
        .text("pressroom_list_content", json!({"org_id": 1}))
        .await;
    assert_eq!(text, "1 items:\n  #8 [blog] queued — Rust at scale\n    Short body.");
}

#[tokio::test]
async fn empty_status_filter_is_not_sent() {
    let server = MockServer::start().await;
    serve(&server, "GET", "/api/content", ResponseTemplate::new(200).set_body_json(json!([]))).await;

    let text = Harness::new(&server)
        .text("pressroom_list_content", json!({"org_id": 1, "status": "", "limit": 5}))
        .await;

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("limit=5"));
    assert_eq!(text, "No content found with status ''.");
}

#[tokio::test]
async fn publish_marks_failed_channels() {
    let server = MockServer::start().await;
    serve(
        &server,
        "POST",
        "/api/publish",
        ResponseTemplate::new(200).set_body_json(json!({
            "published": 1,
            "errors": 1,
            "results": [{"channel": "linkedin"}, {"channel": "x", "error": "token expired"}]
        })),
    )
    .await;

    let text = Harness::new(&server)
        .text("pressroom_publish", json!({"org_id": 1}))
        .await;
    assert_eq!(
        text,
        "Published: 1, Errors: 1\n\n  [linkedin] sent\n  [x] FAILED: token expired"
    );
}

#[tokio::test]
async fn bare_scalar_payload_does_not_break_formatters() {
    let server = MockServer::start().await;
    serve(&server, "POST", "/api/pipeline/scout", ResponseTemplate::new(200).set_body_json(json!(42))).await;

    let text = Harness::new(&server)
        .text("pressroom_scout", json!({"org_id": 1}))
        .await;
    assert!(text.starts_with("Scout complete. Raw: 0, Relevant: 0, Saved: 0, Dupes skipped: 0."));
}

#[tokio::test]
async fn skills_listing_flags_wired_skills() {
    let server = MockServer::start().await;
    serve(
        &server,
        "GET",
        "/api/skills",
        ResponseTemplate::new(200).set_body_json(json!([
            {"name": "seo_geo", "first_line": "Optimize for AI answers."},
            {"name": "tweetstorm", "first_line": "Thread it."}
        ])),
    )
    .await;

    let text = Harness::new(&server).text("pressroom_list_skills", json!({})).await;
    assert_eq!(
        text,
        "2 skills:\n  seo_geo [WIRED] — Optimize for AI answers.\n  tweetstorm [AVAILABLE] — Thread it."
    );
}
