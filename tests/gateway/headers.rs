use crate::support::{API_KEY, gateway, gateway_for};
use pressroom_mcp::gateway::RequestOptions;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn bearer_header_sent_when_key_configured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/orgs"))
        .and(header("authorization", format!("Bearer {API_KEY}").as_str()))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let response = gateway(&server).get_json("/api/orgs").await.unwrap();
    assert_eq!(response.into_result().unwrap(), json!([]));
}

#[tokio::test]
async fn no_auth_header_without_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/orgs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    gateway_for(&server, None, None)
        .get_json("/api/orgs")
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
    assert!(requests[0].headers.get("x-org-id").is_none());
}

#[tokio::test]
async fn org_header_follows_call_then_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/signals"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = gateway_for(&server, Some(API_KEY), Some(1));
    client
        .get("/api/signals", RequestOptions::new())
        .await
        .unwrap();
    client
        .get("/api/signals", RequestOptions::new().org(42))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].headers.get("x-org-id").unwrap(), "1");
    assert_eq!(requests[1].headers.get("x-org-id").unwrap(), "42");
}

#[tokio::test]
async fn unscoped_calls_carry_only_an_explicit_org() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/orgs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = gateway_for(&server, Some(API_KEY), Some(1));
    client.get_json("/api/orgs").await.unwrap();
    client
        .get("/api/orgs", RequestOptions::new().unscoped().org(6))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("x-org-id").is_none());
    assert_eq!(requests[1].headers.get("x-org-id").unwrap(), "6");
}

#[tokio::test]
async fn get_sends_no_body_and_renders_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/content"))
        .and(query_param("status", "queued"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let options = RequestOptions::new()
        .org(3)
        .query("limit", 5)
        .query_non_empty("status", "queued")
        .body(json!({"ignored": true}));
    gateway(&server).get("/api/content", options).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn post_body_is_preserved_and_defaults_to_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/stories"))
        .and(body_json(json!({"title": "Launch week", "signal_ids": [1, 2]})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 9})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/publish"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"published": 0})))
        .expect(1)
        .mount(&server)
        .await;

    let client = gateway(&server);
    let created = client
        .post(
            "/api/stories",
            RequestOptions::new().body(json!({"title": "Launch week", "signal_ids": [1, 2]})),
        )
        .await
        .unwrap();
    assert_eq!(created.into_result().unwrap(), json!({"id": 9}));

    client
        .post("/api/publish", RequestOptions::new().org(3))
        .await
        .unwrap();
}

#[tokio::test]
async fn patch_carries_body_and_delete_does_not() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/stories/4"))
        .and(body_json(json!({"status": "archived"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 4})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/stories/4"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = gateway(&server);
    client
        .patch(
            "/api/stories/4",
            RequestOptions::new().org(1).body(json!({"status": "archived"})),
        )
        .await
        .unwrap();
    let deleted = client
        .delete("/api/stories/4", RequestOptions::new().org(1))
        .await
        .unwrap();

    assert!(!deleted.is_error());
    let requests = server.received_requests().await.unwrap();
    assert!(requests[1].body.is_empty());
}
