use crate::support::Harness;
use pressroom_mcp::error::ToolError;
use pressroom_mcp::gateway::GatewayClient;
use pressroom_mcp::tools::{ToolContext, default_registry};
use serde_json::json;
use std::sync::Arc;
use wiremock::MockServer;

#[tokio::test]
async fn unknown_tool_is_a_failed_result() {
    let server = MockServer::start().await;
    let result = Harness::new(&server)
        .call("pressroom_teleport", json!({}))
        .await;
    assert!(!result.success);
    assert_eq!(result.display_text(), "Tool not found: pressroom_teleport");
}

#[tokio::test]
async fn wrong_argument_types_are_rejected_before_any_call() {
    let server = MockServer::start().await;
    let harness = Harness::new(&server);

    let err = harness
        .registry
        .execute("pressroom_list_content", json!({"org_id": "one"}), &harness.ctx)
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ToolError>(),
        Some(ToolError::InvalidArguments { name, .. }) if name == "pressroom_list_content"
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn unreachable_backend_fails_only_that_invocation() {
    let registry = default_registry();
    let ctx = ToolContext::new(Arc::new(
        GatewayClient::with_base_url("http://127.0.0.1:9").unwrap(),
    ));

    let result = registry
        .execute("pressroom_scoreboard", json!({}), &ctx)
        .await
        .unwrap();
    assert!(!result.success);
    assert!(result.display_text().starts_with("Error: backend unreachable: "));

    let again = registry
        .execute("pressroom_list_skills", json!(null), &ctx)
        .await
        .unwrap();
    assert!(!again.success);
}
