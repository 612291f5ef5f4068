use crate::support::{Harness, gateway};
use pressroom_mcp::pipeline::{GENERATE_PATH, PipelineRun, SCOUT_PATH, ScoutGenerateState};
use pressroom_mcp::pipeline::{full_pipeline, scout_generate_pipeline};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn scout_failure_never_calls_generate() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SCOUT_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "no sources"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(0)
        .mount(&server)
        .await;

    let report = full_pipeline(&gateway(&server), 1, Vec::new()).await.unwrap();
    assert_eq!(report, "Scout failed: no sources");
}

#[tokio::test]
async fn scout_error_body_with_ok_status_halts_before_generate() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SCOUT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "org has no sources"})))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(0)
        .mount(&server)
        .await;

    let report = full_pipeline(&gateway(&server), 1, Vec::new()).await.unwrap();
    assert_eq!(report, "Scout failed: org has no sources");

    let text = Harness::new(&server)
        .text("pressroom_scout", json!({"org_id": 1}))
        .await;
    assert_eq!(text, "Error: org has no sources");
}

#[tokio::test]
async fn generate_failure_reports_scout_summary() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SCOUT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"signals_saved": 3})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({"error": "rate limited"})))
        .mount(&server)
        .await;

    let report = full_pipeline(&gateway(&server), 1, Vec::new()).await.unwrap();
    assert_eq!(report, "Scout: 3 new signals\nGenerate failed: rate limited");
}

#[tokio::test]
async fn completed_run_lists_generated_items() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SCOUT_PATH))
        .and(header("x-org-id", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"signals_saved": 2})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-org-id", "4"))
        .and(body_json(json!({"channels": ["linkedin"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": 31, "channel": "linkedin", "headline": "We shipped"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let report = full_pipeline(&gateway(&server), 4, vec!["linkedin".into()])
        .await
        .unwrap();

    assert!(report.starts_with("Pipeline complete.\nScout: 2 new signals\nGenerate: 1 content items\n"));
    assert!(report.contains("  [linkedin] #31 — We shipped"));
}

#[tokio::test]
async fn halted_run_keeps_completed_step_output() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SCOUT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"signals_saved": 5})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let run = scout_generate_pipeline()
        .run(&gateway(&server), ScoutGenerateState::new(1, Vec::new()))
        .await
        .unwrap();

    match run {
        PipelineRun::Halted { step, failure, state } => {
            assert_eq!(step, "generate");
            assert_eq!(failure.message, "HTTP 503: upstream down");
            assert_eq!(state.signals_saved.as_deref(), Some("5"));
            assert!(state.items.is_none());
        }
        PipelineRun::Completed(_) => panic!("generate failure should halt the run"),
    }
}

#[tokio::test]
async fn full_pipeline_tool_renders_report() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SCOUT_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "scraper crashed"})))
        .mount(&server)
        .await;

    let text = Harness::new(&server)
        .text("pressroom_full_pipeline", json!({"org_id": 1}))
        .await;
    assert_eq!(text, "Scout failed: scraper crashed");
}

#[tokio::test]
async fn fault_after_scout_keeps_scout_summary() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SCOUT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"signals_saved": 3})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway timeout</html>"))
        .mount(&server)
        .await;

    let err = full_pipeline(&gateway(&server), 1, Vec::new()).await.unwrap_err();
    assert_eq!(err.progress.as_deref(), Some("Scout: 3 new signals"));

    let result = Harness::new(&server)
        .call("pressroom_full_pipeline", json!({"org_id": 1}))
        .await;
    assert!(!result.success);
    assert!(
        result
            .error
            .as_deref()
            .unwrap()
            .starts_with("Scout: 3 new signals\nError: backend unreachable: ")
    );
}
