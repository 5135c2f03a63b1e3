//! HTTP surface: agent deployment, templates, and health.
//!
//! Handlers translate requests into application-service calls and map
//! outcomes to status codes. No business logic lives here.

pub mod deploy;
pub mod error;
pub mod templates;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::application::services::{DeploymentOrchestrator, TemplateRegistry};

pub use deploy::{DeployRequest, DeployResponse};
pub use error::ApiError;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    /// `None` when deployment is disabled; the deploy endpoint answers 501.
    pub orchestrator: Option<Arc<DeploymentOrchestrator>>,
    pub templates: Arc<TemplateRegistry>,
}

impl AppState {
    #[must_use]
    pub fn new(orchestrator: Option<DeploymentOrchestrator>, templates: TemplateRegistry) -> Self {
        Self {
            orchestrator: orchestrator.map(Arc::new),
            templates: Arc::new(templates),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/v1/health", get(health))
        // Both spellings are accepted; clients send the trailing slash.
        .route("/api/v1/deploy", post(deploy::deploy_agent))
        .route("/api/v1/deploy/", post(deploy::deploy_agent))
        .route(
            "/agents/templates",
            get(templates::list_templates).post(templates::create_template),
        )
        .route("/agents/templates/{id}", get(templates::get_template))
        .route(
            "/agents/update-template",
            post(templates::update_template_prompt),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(Debug, Serialize)]
struct RootResponse {
    name: &'static str,
    version: &'static str,
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        name: "paragon",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}
