//! Router tests: requests go through the full axum stack via `oneshot`.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use paragon_server::api::{AppState, router};
use paragon_server::application::services::TemplateRegistry;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::helpers::{
    CLUSTER_IP_SVC, LB_PENDING, MemoryStore, RecordingRunner, err_output, orchestrator,
};

fn app(runner: RecordingRunner) -> (Router, Arc<RecordingRunner>) {
    let runner = Arc::new(runner);
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(
        Some(orchestrator(&runner, &store)),
        TemplateRegistry::default(),
    );
    (router(state), runner)
}

fn disabled_app() -> Router {
    router(AppState::new(None, TemplateRegistry::default()))
}

fn bot1_body() -> Value {
    json!({
        "config": {
            "name": "bot1",
            "model": "gpt-4",
            "instruction": "Be helpful",
            "resources": {"cpu": "100m", "memory": "128Mi"},
            "scaling": {"replicas": 1},
            "cloud": "none"
        },
        "secrets": {"API_KEY": "k"}
    })
}

async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, value)
}

// ── Health ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn health_reports_healthy() {
    let (status, body) = send(disabled_app(), "GET", "/api/v1/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy"}));
}

#[tokio::test]
async fn root_reports_name_and_version() {
    let (status, body) = send(disabled_app(), "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"name": "paragon", "version": env!("CARGO_PKG_VERSION")})
    );
}

// ── Deploy ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn deploy_returns_created_with_result() {
    let (app, runner) = app(RecordingRunner::healthy(CLUSTER_IP_SVC));
    let (status, body) = send(app, "POST", "/api/v1/deploy/", Some(bot1_body())).await;

    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["status"], "success");
    assert_eq!(body["data"]["message"], "Agent bot1 deployed successfully");
    assert_eq!(body["data"]["service"]["name"], "bot1-service");
    assert_eq!(
        body["data"]["service"]["url"],
        "http://bot1-service.ai-agents.svc.cluster.local"
    );
    assert_eq!(runner.calls().len(), 4);
}

#[tokio::test]
async fn deploy_without_trailing_slash_is_accepted() {
    let (app, _) = app(RecordingRunner::healthy(CLUSTER_IP_SVC));
    let (status, _) = send(app, "POST", "/api/v1/deploy", Some(bot1_body())).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn deploy_secrets_may_be_omitted() {
    let (app, _) = app(RecordingRunner::healthy(LB_PENDING));
    let mut body = bot1_body();
    body.as_object_mut().expect("object").remove("secrets");
    body["config"]["cloud"] = json!("digitalocean");

    let (status, body) = send(app, "POST", "/api/v1/deploy/", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["data"]["service"]["url"], "pending");
}

#[tokio::test]
async fn deploy_missing_field_is_bad_request() {
    let (app, runner) = app(RecordingRunner::healthy(CLUSTER_IP_SVC));
    let mut body = bot1_body();
    body["config"]
        .as_object_mut()
        .expect("object")
        .remove("model");

    let (status, body) = send(app, "POST", "/api/v1/deploy/", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"detail": "Missing required field: model"}));
    assert!(runner.calls().is_empty());
}

#[tokio::test]
async fn deploy_malformed_body_is_bad_request() {
    let (app, runner) = app(RecordingRunner::healthy(CLUSTER_IP_SVC));
    let (status, body) = send(app, "POST", "/api/v1/deploy/", Some(json!({"secrets": {}}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string(), "{body}");
    assert!(runner.calls().is_empty());
}

#[tokio::test]
async fn deploy_cluster_failure_is_bad_request_with_stderr() {
    let runner = RecordingRunner::new().on(
        "bot1-service.yaml",
        err_output(1, b"error: services \"bot1-service\" is forbidden"),
    );
    let (app, _) = app(runner);

    let (status, body) = send(app, "POST", "/api/v1/deploy/", Some(bot1_body())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let detail = body["detail"].as_str().expect("detail");
    assert!(detail.contains("is forbidden"), "{detail}");
}

#[tokio::test]
async fn deploy_unexpected_failure_is_internal_error() {
    let (app, _) = app(RecordingRunner::new().fail_spawn("apply", "failed to spawn kubectl"));
    let (status, body) = send(app, "POST", "/api/v1/deploy/", Some(bot1_body())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        body["detail"]
            .as_str()
            .expect("detail")
            .contains("failed to spawn kubectl")
    );
}

#[tokio::test]
async fn deploy_disabled_is_not_implemented() {
    let (status, body) = send(disabled_app(), "POST", "/api/v1/deploy/", Some(bot1_body())).await;
    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    assert_eq!(
        body,
        json!({"detail": "Agent deployment not configured on this server"})
    );
}

// ── Templates ─────────────────────────────────────────────────────────────────

fn custom_template(id: &str) -> Value {
    json!({
        "id": id,
        "name": "Code Reviewer",
        "description": "Reviews pull requests",
        "agent_type": "content_writer",
        "framework": "LangChain",
        "use_cases": ["Code review"]
    })
}

#[tokio::test]
async fn templates_list_holds_builtins() {
    let (status, body) = send(disabled_app(), "GET", "/agents/templates", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|t| t["id"].as_str())
        .collect();
    assert_eq!(ids, ["customer-support-v1", "content-writer-v1", "data-analyst-v1"]);
}

#[tokio::test]
async fn template_lookup_and_not_found() {
    let app = disabled_app();
    let (status, body) = send(app.clone(), "GET", "/agents/templates/data-analyst-v1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["framework"], "AutoGen");
    assert_eq!(body["default_config"]["model"], "mixtral-8x7b-32768");

    let (status, body) = send(app, "GET", "/agents/templates/unknown", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Template 'unknown' not found"}));
}

#[tokio::test]
async fn template_create_then_duplicate_conflicts() {
    let app = disabled_app();
    let (status, body) = send(
        app.clone(),
        "POST",
        "/agents/templates",
        Some(custom_template("code-reviewer-v1")),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body.as_array().expect("array").len(), 4);
    assert_eq!(body[3]["default_config"]["max_tokens"], 4096);

    let (status, _) = send(
        app,
        "POST",
        "/agents/templates",
        Some(custom_template("code-reviewer-v1")),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn update_template_prompt_reports_count() {
    let app = disabled_app();
    let (status, body) = send(
        app.clone(),
        "POST",
        "/agents/update-template",
        Some(json!({"system_prompt": "Be concise.", "agent_id": "customer-support-v1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "success", "updated_agents": 1}));

    let (_, template) = send(app.clone(), "GET", "/agents/templates/customer-support-v1", None).await;
    assert_eq!(template["default_config"]["system_prompt"], "Be concise.");

    let (status, body) = send(
        app,
        "POST",
        "/agents/update-template",
        Some(json!({"system_prompt": "Be concise."})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["updated_agents"], 3);
}

#[tokio::test]
async fn update_template_unknown_agent_is_not_found() {
    let (status, body) = send(
        disabled_app(),
        "POST",
        "/agents/update-template",
        Some(json!({"system_prompt": "x", "agent_id": "ghost"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Agent with ID ghost not found"}));
}
