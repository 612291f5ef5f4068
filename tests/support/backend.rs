#![allow(dead_code)]

use pressroom_mcp::config::BackendConfig;
use pressroom_mcp::gateway::GatewayClient;
use pressroom_mcp::tools::{ToolContext, ToolRegistry, ToolResult, default_registry};
use serde_json::Value;
use std::sync::Arc;
use wiremock::MockServer;

pub const API_KEY: &str = "pr-test-key";

pub fn gateway_for(server: &MockServer, api_key: Option<&str>, org_id: Option<i64>) -> GatewayClient {
    GatewayClient::new(&BackendConfig {
        url: server.uri(),
        api_key: api_key.map(str::to_string),
        org_id,
        timeout_secs: 5,
    })
    .expect("mock server uri should be a valid backend url")
}

/// Gateway with the test key and no default org.
pub fn gateway(server: &MockServer) -> GatewayClient {
    gateway_for(server, Some(API_KEY), None)
}

pub struct Harness {
    pub registry: ToolRegistry,
    pub ctx: ToolContext,
}

impl Harness {
    pub fn new(server: &MockServer) -> Self {
        Self {
            registry: default_registry(),
            ctx: ToolContext::new(Arc::new(gateway(server))),
        }
    }

    /// Harness whose gateway carries a configured default tenant.
    pub fn with_default_org(server: &MockServer, org_id: i64) -> Self {
        Self {
            registry: default_registry(),
            ctx: ToolContext::new(Arc::new(gateway_for(server, Some(API_KEY), Some(org_id)))),
        }
    }

    pub async fn call(&self, tool: &str, args: Value) -> ToolResult {
        self.registry
            .execute(tool, args, &self.ctx)
            .await
            .expect("tool arguments should be accepted")
    }

    /// Text of a call that is expected to complete.
    pub async fn text(&self, tool: &str, args: Value) -> String {
        let result = self.call(tool, args).await;
        assert!(result.success, "{tool} failed: {:?}", result.error);
        result.output
    }
}

/// Bodies of every request the mock received, parsed as JSON (`Null` when empty).
pub async fn received_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .expect("request recording should be enabled")
        .iter()
        .map(|request| {
            if request.body.is_empty() {
                Value::Null
            } else {
                serde_json::from_slice(&request.body).expect("request body should be JSON")
            }
        })
        .collect()
}
