use crate::support::{Harness, received_bodies};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ok() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"ok": true}))
}

#[tokio::test]
async fn scout_sends_since_hours_with_default() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/pipeline/scout"))
        .and(query_param("since_hours", "24"))
        .and(header("x-org-id", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"signals_saved": 0})))
        .expect(1)
        .mount(&server)
        .await;

    Harness::new(&server)
        .text("pressroom_scout", json!({"org_id": 3}))
        .await;
}

#[tokio::test]
async fn audit_sends_domain_and_deep_flag() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/audit/seo"))
        .and(query_param("deep", "false"))
        .and(body_json(json!({"domain": "acme.dev"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"score": 81, "total_issues": 4})))
        .expect(1)
        .mount(&server)
        .await;

    let text = Harness::new(&server)
        .text(
            "pressroom_audit",
            json!({"org_id": 1, "domain": "acme.dev", "deep": false}),
        )
        .await;
    assert!(text.starts_with("SEO Audit complete. Score: 81, Issues: 4\n\n"));
}

#[tokio::test]
async fn unscoped_tools_send_no_org_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/scoreboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let text = Harness::new(&server).text("pressroom_scoreboard", json!({})).await;

    assert_eq!(text, "Scoreboard (0 orgs):\n");
    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("x-org-id").is_none());
}

#[tokio::test]
async fn default_tenant_is_not_sent_to_global_routes() {
    let server = MockServer::start().await;
    for route in ["/api/orgs", "/api/orgs/2", "/api/scoreboard", "/api/skills", "/api/content/17"] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;
    }

    let harness = Harness::with_default_org(&server, 5);
    harness.text("pressroom_list_orgs", json!({})).await;
    harness.text("pressroom_get_org", json!({"org_id": 2})).await;
    harness.text("pressroom_scoreboard", json!({})).await;
    harness.text("pressroom_list_skills", json!({})).await;
    harness.text("pressroom_get_content", json!({"content_id": 17})).await;

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 5);
    assert!(requests.iter().all(|request| request.headers.get("x-org-id").is_none()));
}

#[tokio::test]
async fn default_tenant_still_scopes_org_routes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/content/17"))
        .and(header("x-org-id", "8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 17})))
        .expect(1)
        .mount(&server)
        .await;

    Harness::with_default_org(&server, 5)
        .text("pressroom_get_content", json!({"content_id": 17, "org_id": 8}))
        .await;
}

#[tokio::test]
async fn edit_content_sends_only_given_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/content/17"))
        .and(body_json(json!({"headline": "Sharper headline"})))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    Harness::new(&server)
        .text(
            "pressroom_edit_content",
            json!({"org_id": 1, "content_id": 17, "headline": "Sharper headline"}),
        )
        .await;
}

#[tokio::test]
async fn edit_without_fields_makes_no_call() {
    let server = MockServer::start().await;
    let text = Harness::new(&server)
        .text("pressroom_edit_content", json!({"org_id": 1, "content_id": 17}))
        .await;
    assert!(text.starts_with("Error: nothing to update"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn settings_update_wraps_keys() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/settings"))
        .and(body_json(json!({"settings": {"voice": "plain", "auto_publish": false}})))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    Harness::new(&server)
        .text(
            "pressroom_update_settings",
            json!({"org_id": 1, "settings": {"voice": "plain", "auto_publish": false}}),
        )
        .await;
}

#[tokio::test]
async fn onboard_apply_posts_profile() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/onboard/apply"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    let profile = json!({"company_name": "Acme", "topics": ["rust"]});
    Harness::new(&server)
        .text(
            "pressroom_onboard_apply",
            json!({"org_id": 5, "profile": profile.clone()}),
        )
        .await;

    assert_eq!(received_bodies(&server).await, vec![json!({"profile": profile})]);
}

#[tokio::test]
async fn youtube_script_omits_unset_inputs() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/youtube/generate"))
        .and(body_json(json!({"content_id": 44})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 3, "title": "T"})))
        .expect(1)
        .mount(&server)
        .await;

    let text = Harness::new(&server)
        .text("pressroom_youtube_script", json!({"org_id": 1, "content_id": 44}))
        .await;
    assert!(text.starts_with("YouTube script generated: #3\nTitle: T\nHook: ?\nStatus: ?\n"));
}

#[tokio::test]
async fn invoke_skill_sends_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/skills/invoke/humanizer"))
        .and(body_json(json!({"text": "Leverage synergies."})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"output": "Work together."})))
        .expect(1)
        .mount(&server)
        .await;

    let text = Harness::new(&server)
        .text(
            "pressroom_invoke_skill",
            json!({"skill_name": "humanizer", "input_text": "Leverage synergies."}),
        )
        .await;
    assert!(text.contains("\"output\": \"Work together.\""));
}
