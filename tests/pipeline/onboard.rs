use crate::support::{Harness, received_bodies};
use pressroom_mcp::pipeline::{CRAWL_PATH, PROFILE_PATH};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn crawl_result_is_threaded_into_profile_synthesis() {
    let server = MockServer::start().await;
    let crawl = json!({"pages": [{"url": "https://acme.dev/", "title": "Acme"}], "links": 14});
    Mock::given(method("POST"))
        .and(path(CRAWL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(&crawl))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(PROFILE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "profile": {"company_name": "Acme", "industry": "DevTools", "topics": ["rust"]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let text = Harness::new(&server)
        .text(
            "pressroom_onboard",
            json!({"org_id": 2, "domain": "acme.dev", "extra_context": "B2B"}),
        )
        .await;

    let bodies = received_bodies(&server).await;
    assert_eq!(bodies[0], json!({"domain": "acme.dev"}));
    assert_eq!(
        bodies[1],
        json!({"crawl_data": crawl, "domain": "acme.dev", "extra_context": "B2B"})
    );
    assert!(text.starts_with("Profile synthesized for acme.dev.\nCompany: Acme\nIndustry: DevTools\nTopics: rust\n"));
}

#[tokio::test]
async fn crawl_failure_skips_profile() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CRAWL_PATH))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({"error": "domain unreachable"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(PROFILE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let text = Harness::new(&server)
        .text("pressroom_onboard", json!({"org_id": 2, "domain": "acme.dev"}))
        .await;
    assert_eq!(text, "Crawl failed: domain unreachable");
}

#[tokio::test]
async fn profile_failure_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CRAWL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"pages": []})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(PROFILE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "model overloaded"})))
        .mount(&server)
        .await;

    let text = Harness::new(&server)
        .text("pressroom_onboard", json!({"org_id": 2, "domain": "acme.dev"}))
        .await;
    assert_eq!(text, "Profile synthesis failed: model overloaded");
}
