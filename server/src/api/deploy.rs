//! Agent deployment endpoint.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use paragon_common::{DeploymentResult, DeploymentStatus, FailureKind, RawAgentConfig, SecretSet};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::AppState;
use super::error::ApiError;

/// Body of `POST /api/v1/deploy`.
#[derive(Debug, Deserialize)]
pub struct DeployRequest {
    pub config: RawAgentConfig,
    /// Injected as container environment variables, in the order given.
    #[serde(default)]
    pub secrets: SecretSet,
}

/// Body of a successful deploy.
#[derive(Debug, Serialize)]
pub struct DeployResponse {
    pub status: DeploymentStatus,
    pub data: DeploymentResult,
}

/// Deploy an agent to the cluster.
///
/// # Errors
///
/// 501 when deployment is disabled on this server, 400 for a malformed body,
/// a missing field or a `kubectl` failure, and 500 for anything else.
pub async fn deploy_agent(
    State(state): State<AppState>,
    payload: Result<Json<DeployRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<DeployResponse>), ApiError> {
    let Some(orchestrator) = state.orchestrator.as_ref() else {
        return Err(ApiError::not_implemented(
            "Agent deployment not configured on this server",
        ));
    };
    let Json(request) = payload?;

    info!(
        agent = request.config.name.as_deref().unwrap_or_default(),
        secrets = request.secrets.len(),
        "deploy requested via API"
    );

    let result = orchestrator.deploy(&request.config, &request.secrets).await;
    if result.is_success() {
        return Ok((
            StatusCode::CREATED,
            Json(DeployResponse {
                status: DeploymentStatus::Success,
                data: result,
            }),
        ));
    }

    let kind = result.failure.unwrap_or(FailureKind::Unexpected);
    Err(ApiError::from_failure(kind, result.message))
}
